use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month in a performance series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub date: NaiveDate,
    /// Cumulative index value, base 100.0 at the series start
    pub value: f64,
    /// That month's return, percent
    pub monthly_return: f64,
}

/// A monthly performance series for one portfolio, oldest point first.
///
/// `simulated` marks the data's provenance. The built-in generator always
/// sets it to `true`: these series are a deterministic stand-in for real
/// history and must never be presented as an authoritative time series.
/// A future real-data source can set `false` without changing callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceHistory {
    pub portfolio_id: String,
    pub simulated: bool,
    pub points: Vec<PerformancePoint>,
}

impl PerformanceHistory {
    /// Series with no points, e.g. for an unknown portfolio id.
    #[must_use]
    pub fn empty(portfolio_id: impl Into<String>) -> Self {
        Self {
            portfolio_id: portfolio_id.into(),
            simulated: true,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
