use std::collections::{BTreeMap, HashSet};

use crate::catalog::{Catalog, InsightCatalog};
use crate::errors::CoreError;
use crate::models::analytics::{
    DashboardStats, FilterOptions, PeerComparison, ProviderOverview, ProviderSummary,
};
use crate::models::portfolio::Portfolio;

/// Range-level analytics over the static catalog: provider summaries,
/// peer comparisons, dashboard stats. All pure reads.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// The option sets the selection screen builds its controls from.
    #[must_use]
    pub fn filter_options(&self, catalog: &Catalog) -> FilterOptions {
        let mut risk_ratings: Vec<u8> = catalog
            .portfolios()
            .iter()
            .map(|p| p.risk_rating)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        risk_ratings.sort_unstable();

        let mut providers: Vec<String> = catalog
            .portfolios()
            .iter()
            .map(|p| p.provider.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        providers.sort();

        FilterOptions {
            platforms: catalog.platforms(),
            providers,
            investment_styles: catalog.investment_styles(),
            risk_min: risk_ratings.first().copied().unwrap_or(1),
            risk_max: risk_ratings.last().copied().unwrap_or(10),
            risk_ratings,
        }
    }

    /// A provider record plus analytics over its range.
    /// `NotFound` for an unknown provider id.
    pub fn provider_summary(
        &self,
        catalog: &Catalog,
        provider_id: &str,
    ) -> Result<ProviderSummary, CoreError> {
        let provider = catalog
            .provider_by_id(provider_id)
            .ok_or_else(|| CoreError::NotFound(format!("provider '{provider_id}'")))?;

        let portfolios = catalog.portfolios_for_provider(&provider.name);

        let risk_range = match (
            portfolios.iter().map(|p| p.risk_rating).min(),
            portfolios.iter().map(|p| p.risk_rating).max(),
        ) {
            (Some(lo), Some(hi)) => format!("{lo}-{hi}"),
            _ => "N/A".to_string(),
        };

        let ocfs: Vec<f64> = portfolios.iter().map(|p| p.ocf).collect();
        let ocf_range = match (
            ocfs.iter().copied().reduce(f64::min),
            ocfs.iter().copied().reduce(f64::max),
        ) {
            (Some(lo), Some(hi)) => format!("{lo:.2}-{hi:.2}"),
            _ => "N/A".to_string(),
        };

        let platform_count = portfolios
            .iter()
            .flat_map(|p| p.platforms.iter())
            .collect::<HashSet<_>>()
            .len();

        Ok(ProviderSummary {
            provider: provider.clone(),
            portfolio_count: portfolios.len(),
            risk_range,
            ocf_range,
            avg_ocf: safe_avg(portfolios.iter().map(|p| Some(p.ocf))),
            avg_return_1yr: safe_avg(portfolios.iter().map(|p| p.return_1yr)),
            avg_return_3yr: safe_avg(portfolios.iter().map(|p| p.return_3yr)),
            avg_return_5yr: safe_avg(portfolios.iter().map(|p| p.return_5yr)),
            platform_count,
        })
    }

    /// How a portfolio sits against its same-risk-rating peers.
    /// `NotFound` for an unknown portfolio id.
    pub fn peer_comparison(
        &self,
        catalog: &Catalog,
        portfolio_id: &str,
    ) -> Result<PeerComparison, CoreError> {
        let subject = catalog
            .portfolio(portfolio_id)
            .ok_or_else(|| CoreError::NotFound(format!("portfolio '{portfolio_id}'")))?;

        let peers: Vec<&Portfolio> = catalog
            .portfolios()
            .iter()
            .filter(|p| p.risk_rating == subject.risk_rating && p.id != subject.id)
            .collect();

        Ok(PeerComparison {
            portfolio_id: subject.id.clone(),
            risk_rating: subject.risk_rating,
            peer_count: peers.len(),
            peer_ids: peers.iter().map(|p| p.id.clone()).collect(),
            avg_ocf: safe_avg(peers.iter().map(|p| Some(p.ocf))),
            avg_return_1yr: safe_avg(peers.iter().map(|p| p.return_1yr)),
            avg_return_3yr: safe_avg(peers.iter().map(|p| p.return_3yr)),
        })
    }

    /// Headline numbers for the landing dashboard.
    #[must_use]
    pub fn dashboard(&self, catalog: &Catalog, insights: &InsightCatalog) -> DashboardStats {
        let mut risk_distribution: BTreeMap<u8, usize> = BTreeMap::new();
        for portfolio in catalog.portfolios() {
            *risk_distribution.entry(portfolio.risk_rating).or_insert(0) += 1;
        }

        let provider_overview = catalog
            .providers()
            .iter()
            .map(|provider| ProviderOverview {
                name: provider.name.clone(),
                aum_bn: provider.aum_bn,
                investment_style: provider.investment_style.clone(),
                portfolio_count: catalog.portfolios_for_provider(&provider.name).len(),
            })
            .collect();

        DashboardStats {
            total_portfolios: catalog.portfolios().len(),
            total_providers: catalog.providers().len(),
            total_platforms: catalog.platforms().len(),
            total_insights: insights.len(),
            market_aum_bn: catalog.providers().iter().map(|p| p.aum_bn).sum(),
            risk_distribution,
            provider_overview,
            recent_insights: insights.all().into_iter().take(3).cloned().collect(),
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Average that skips missing values, rounded to 2 decimal places.
/// Zero when nothing contributes.
fn safe_avg(values: impl Iterator<Item = Option<f64>>) -> f64 {
    let clean: Vec<f64> = values.flatten().collect();
    if clean.is_empty() {
        return 0.0;
    }
    let avg = clean.iter().sum::<f64>() / clean.len() as f64;
    (avg * 100.0).round() / 100.0
}
