use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's alert subscription to an MPS provider's range.
///
/// Rows are never deleted: unsubscribing flips `active` to false and a
/// later re-subscribe appends a fresh row. At most one row per
/// (user, provider) pair is active at a time; the store enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: String,
    pub user_email: String,
    pub provider_id: String,
    pub provider_name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    pub fn new(
        user_id: impl Into<String>,
        user_email: impl Into<String>,
        provider_id: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            user_email: user_email.into(),
            provider_id: provider_id.into(),
            provider_name: provider_name.into(),
            active: true,
            created_at: Utc::now(),
        }
    }
}
