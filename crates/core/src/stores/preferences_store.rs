use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::models::preferences::{Preferences, PreferencesUpdate};

/// Per-user settings records.
///
/// Reads for a user with no stored record return the defaults; updates
/// merge into the current (possibly defaulted) record rather than
/// replacing it.
pub struct PreferencesStore {
    records: Mutex<HashMap<String, Preferences>>,
}

impl PreferencesStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// The user's preferences, defaulted when never set.
    #[must_use]
    pub fn preferences_for(&self, user_id: &str) -> Preferences {
        self.lock().get(user_id).cloned().unwrap_or_default()
    }

    /// Merge a partial update into the user's record and return the result.
    pub fn update(&self, user_id: &str, update: PreferencesUpdate) -> Preferences {
        let mut records = self.lock();
        let record = records.entry(user_id.to_string()).or_default();
        record.merge(update);
        record.clone()
    }

    /// Toggle email alerts for one provider subscription.
    pub fn set_subscription_alert(
        &self,
        user_id: &str,
        provider_id: &str,
        enabled: bool,
    ) -> Preferences {
        let mut records = self.lock();
        let record = records.entry(user_id.to_string()).or_default();
        record
            .subscription_alerts
            .insert(provider_id.to_string(), enabled);
        record.clone()
    }

    /// Whether alerts are enabled for a subscription (default: true).
    #[must_use]
    pub fn should_alert(&self, user_id: &str, provider_id: &str) -> bool {
        self.lock()
            .get(user_id)
            .map_or(true, |p| p.alerts_enabled(provider_id))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Preferences>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for PreferencesStore {
    fn default() -> Self {
        Self::new()
    }
}
