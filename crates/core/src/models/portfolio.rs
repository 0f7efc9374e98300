use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Client time horizon a portfolio is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeHorizon {
    /// Under ~5 years
    Short,
    /// Roughly 5–10 years
    Medium,
    /// 10+ years
    Long,
}

impl std::fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeHorizon::Short => write!(f, "short"),
            TimeHorizon::Medium => write!(f, "medium"),
            TimeHorizon::Long => write!(f, "long"),
        }
    }
}

/// Headline asset-class split, in percent. Nominally sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetAllocation {
    pub equity: f64,
    pub bonds: f64,
    pub alternatives: f64,
    pub cash: f64,
}

/// Regional equity/bond exposure, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicAllocation {
    pub uk: f64,
    pub north_america: f64,
    pub europe: f64,
    pub asia_pacific: f64,
    pub emerging_markets: f64,
    pub other: f64,
}

/// Asset class of an underlying holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundType {
    Equity,
    Bond,
    Alternative,
}

/// A single fund inside a model portfolio, with its target weight in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderlyingFund {
    pub name: String,
    pub weight: f64,
    #[serde(rename = "type")]
    pub fund_type: FundType,
}

/// A model portfolio (MPS) record with its full analytic attribute set.
///
/// Immutable after catalog load: all reads hand out references, nothing
/// mutates a record at runtime. Return figures are trailing cumulative
/// percentages; `None` means the figure was not published for that range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Unique identifier, e.g. "vanguard-ls-60"
    pub id: String,
    pub name: String,
    /// Owning provider's display name (must match a `Provider.name` in the catalog)
    pub provider: String,

    /// Risk rating on a 1–10 scale
    pub risk_rating: u8,
    /// Human label for the rating, e.g. "Balanced"
    pub risk_label: String,

    pub asset_allocation: AssetAllocation,
    pub geographic_allocation: GeographicAllocation,

    /// Ongoing Charges Figure, annualised cost in percent
    pub ocf: f64,
    pub return_1yr: Option<f64>,
    pub return_3yr: Option<f64>,
    pub return_5yr: Option<f64>,
    pub return_ytd: Option<f64>,
    pub return_since_inception: Option<f64>,

    /// Annualised volatility, percent
    pub volatility: f64,
    /// Worst peak-to-trough drawdown, percent (negative)
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    pub income_yield: f64,

    /// Rebalancing cadence label, e.g. "Quarterly"
    pub rebalancing: String,
    /// Minimum investment in GBP
    pub min_investment: f64,

    /// Adviser platforms the portfolio is available on
    pub platforms: Vec<String>,
    pub ethical: bool,
    pub decumulation_suitable: bool,
    pub time_horizons: Vec<TimeHorizon>,

    pub underlying_funds: Vec<UnderlyingFund>,
    pub inception_date: NaiveDate,
    pub benchmark: String,
}

impl Portfolio {
    /// Whether the portfolio is available on any of the given platforms.
    #[must_use]
    pub fn on_any_platform(&self, platforms: &[String]) -> bool {
        platforms.iter().any(|p| self.platforms.contains(p))
    }

    /// Whether the portfolio is designed for the given time horizon.
    #[must_use]
    pub fn suits_horizon(&self, horizon: TimeHorizon) -> bool {
        self.time_horizons.contains(&horizon)
    }
}
