use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::portfolio::{Portfolio, TimeHorizon};

/// A conjunctive predicate set over the portfolio universe.
///
/// `None` (or `false` for the boolean flags) means the dimension imposes
/// no restriction. Absence is the don't-filter sentinel, so callers must
/// distinguish "not specified" from "specified as empty": a supplied but
/// empty `platforms`/`providers` list intersects with nothing and therefore
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioFilter {
    /// Lower risk bound, inclusive (1–10; range validity is the boundary
    /// layer's job, not the engine's)
    pub risk_min: u8,
    /// Upper risk bound, inclusive
    pub risk_max: u8,
    /// Match portfolios available on at least one of these platforms
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
    /// Match portfolios owned by one of these providers (display names)
    #[serde(default)]
    pub providers: Option<Vec<String>>,
    #[serde(default)]
    pub ethical_only: bool,
    #[serde(default)]
    pub decumulation: bool,
    #[serde(default)]
    pub time_horizon: Option<TimeHorizon>,
    /// Exclude portfolios whose minimum investment exceeds this ceiling
    #[serde(default)]
    pub min_investment_limit: Option<f64>,
    /// Exclude portfolios whose OCF exceeds this ceiling
    #[serde(default)]
    pub ocf_max: Option<f64>,
}

impl Default for PortfolioFilter {
    /// The unrestricted filter: full risk band, every other dimension open.
    fn default() -> Self {
        Self {
            risk_min: 1,
            risk_max: 10,
            platforms: None,
            providers: None,
            ethical_only: false,
            decumulation: false,
            time_horizon: None,
            min_investment_limit: None,
            ocf_max: None,
        }
    }
}

impl PortfolioFilter {
    /// Whether a single portfolio satisfies every supplied predicate.
    #[must_use]
    pub fn matches(&self, portfolio: &Portfolio) -> bool {
        if portfolio.risk_rating < self.risk_min || portfolio.risk_rating > self.risk_max {
            return false;
        }
        if let Some(platforms) = &self.platforms {
            if !portfolio.on_any_platform(platforms) {
                return false;
            }
        }
        if let Some(providers) = &self.providers {
            if !providers.contains(&portfolio.provider) {
                return false;
            }
        }
        if self.ethical_only && !portfolio.ethical {
            return false;
        }
        if self.decumulation && !portfolio.decumulation_suitable {
            return false;
        }
        if let Some(horizon) = self.time_horizon {
            if !portfolio.suits_horizon(horizon) {
                return false;
            }
        }
        if let Some(limit) = self.min_investment_limit {
            if portfolio.min_investment > limit {
                return false;
            }
        }
        if let Some(ocf_max) = self.ocf_max {
            if portfolio.ocf > ocf_max {
                return false;
            }
        }
        true
    }
}

/// Linear-scan predicate matching over the static catalog.
///
/// Pure read, no side effects. Matches come back in catalog order;
/// callers needing a different ordering sort separately.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// All portfolios satisfying every supplied predicate.
    #[must_use]
    pub fn filter<'a>(&self, catalog: &'a Catalog, filter: &PortfolioFilter) -> Vec<&'a Portfolio> {
        catalog
            .portfolios()
            .iter()
            .filter(|p| filter.matches(p))
            .collect()
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
