use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// A login session held against a bearer token.
///
/// Validity is anchored to `created`: the session expires a fixed TTL
/// after login regardless of activity. `last_active` is refreshed on each
/// lookup but is deliberately not consulted by the expiry check, keeping
/// the window fixed rather than sliding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub created: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl Session {
    pub fn new(user: User) -> Self {
        let now = Utc::now();
        Self {
            user,
            created: now,
            last_active: now,
        }
    }
}
