use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::catalog::Catalog;
use crate::errors::CoreError;
use crate::models::performance::{PerformanceHistory, PerformancePoint};
use crate::models::portfolio::Portfolio;

/// Generates simulated monthly performance series.
///
/// The platform has no real time-series feed yet, so history is
/// backfilled from each portfolio's stated 3-year return and volatility:
/// a generator seeded from a stable hash of the portfolio id draws
/// normally distributed monthly returns around the implied monthly mean
/// and compounds them into an index starting at 100.0. The same id always
/// yields the same series, and every series carries `simulated: true` so
/// callers can never mistake it for authoritative data.
pub struct PerformanceService;

impl PerformanceService {
    pub fn new() -> Self {
        Self
    }

    /// Monthly history ending at today's date. Unknown ids yield an
    /// empty series.
    ///
    /// `months` is expected to be in the 6 to 60 range; bounding it is
    /// the caller's responsibility.
    pub fn history(
        &self,
        catalog: &Catalog,
        portfolio_id: &str,
        months: u32,
    ) -> Result<PerformanceHistory, CoreError> {
        self.history_as_of(catalog, portfolio_id, months, Utc::now().date_naive())
    }

    /// Monthly history ending at an explicit date. With a fixed `as_of`,
    /// the output is fully deterministic for a given (id, months) pair.
    pub fn history_as_of(
        &self,
        catalog: &Catalog,
        portfolio_id: &str,
        months: u32,
        as_of: NaiveDate,
    ) -> Result<PerformanceHistory, CoreError> {
        let Some(portfolio) = catalog.portfolio(portfolio_id) else {
            return Ok(PerformanceHistory::empty(portfolio_id));
        };

        let points = simulate(portfolio, months, as_of)?;
        Ok(PerformanceHistory {
            portfolio_id: portfolio_id.to_string(),
            simulated: true,
            points,
        })
    }
}

impl Default for PerformanceService {
    fn default() -> Self {
        Self::new()
    }
}

fn simulate(
    portfolio: &Portfolio,
    months: u32,
    as_of: NaiveDate,
) -> Result<Vec<PerformancePoint>, CoreError> {
    let mut rng = StdRng::seed_from_u64(fnv1a64(portfolio.id.as_bytes()));

    // Monthly mean implied by compounding the 3-year figure; zero when the
    // provider publishes no 3-year return.
    let return_3yr = portfolio.return_3yr.unwrap_or(0.0);
    let base_monthly = (1.0 + return_3yr / 100.0).powf(1.0 / 36.0) - 1.0;
    let vol_monthly = (portfolio.volatility / 100.0 / 12f64.sqrt()).max(f64::EPSILON);

    let normal = Normal::new(base_monthly, vol_monthly)
        .map_err(|e| CoreError::Simulation(e.to_string()))?;

    let mut points = Vec::with_capacity(months as usize);
    let mut cumulative = 100.0;

    // Oldest first: step back `months` 30-day periods, then walk forward.
    for i in (1..=i64::from(months)).rev() {
        let date = as_of - Duration::days(i * 30);
        let monthly_return = normal.sample(&mut rng);
        cumulative *= 1.0 + monthly_return;
        points.push(PerformancePoint {
            date,
            value: round2(cumulative),
            monthly_return: round2(monthly_return * 100.0),
        });
    }

    Ok(points)
}

/// FNV-1a, 64-bit: a stable hash so the seed survives process restarts
/// (unlike the std hasher, which is keyed per `HashMap` instance).
fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
