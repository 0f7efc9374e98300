use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::insight::Insight;
use super::provider::Provider;

/// The option sets a selection screen needs to build its filter controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub platforms: Vec<String>,
    pub providers: Vec<String>,
    pub investment_styles: Vec<String>,
    /// Distinct risk ratings present in the catalog, ascending
    pub risk_ratings: Vec<u8>,
    pub risk_min: u8,
    pub risk_max: u8,
}

/// A provider record enriched with range-level analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSummary {
    pub provider: Provider,
    pub portfolio_count: usize,
    /// e.g. "3-7"; "N/A" when the provider has no portfolios
    pub risk_range: String,
    /// e.g. "0.22-0.54"
    pub ocf_range: String,
    pub avg_ocf: f64,
    pub avg_return_1yr: f64,
    pub avg_return_3yr: f64,
    pub avg_return_5yr: f64,
    /// Distinct platforms across the provider's portfolios
    pub platform_count: usize,
}

/// How a portfolio's figures sit against same-risk-rating peers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerComparison {
    pub portfolio_id: String,
    pub risk_rating: u8,
    pub peer_count: usize,
    pub peer_ids: Vec<String>,
    pub avg_ocf: f64,
    pub avg_return_1yr: f64,
    pub avg_return_3yr: f64,
}

/// One row of the dashboard's provider overview table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderOverview {
    pub name: String,
    pub aum_bn: f64,
    pub investment_style: String,
    pub portfolio_count: usize,
}

/// Headline numbers for the landing dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_portfolios: usize,
    pub total_providers: usize,
    pub total_platforms: usize,
    pub total_insights: usize,
    /// Sum of provider AUM, £bn
    pub market_aum_bn: f64,
    /// risk rating → portfolio count, ascending by rating
    pub risk_distribution: BTreeMap<u8, usize>,
    pub provider_overview: Vec<ProviderOverview>,
    pub recent_insights: Vec<Insight>,
}
