use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A research article / market commentary piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub title: String,
    /// Editorial category, e.g. "Thematic Analysis", "Regulatory"
    pub category: String,
    pub date: NaiveDate,
    pub author: String,
    pub summary: String,
    pub content: String,
    pub tags: Vec<String>,
    pub read_time_minutes: u8,
}
