use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How often a user wants alert emails batched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationFrequency {
    Instant,
    Daily,
    Weekly,
}

impl Default for NotificationFrequency {
    fn default() -> Self {
        NotificationFrequency::Instant
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPreferences {
    /// Risk level pre-selected in the selection screen (1–10)
    pub default_risk_level: u8,
    pub dark_mode: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            default_risk_level: 7,
            dark_mode: false,
        }
    }
}

/// Notification settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub frequency: NotificationFrequency,
}

/// Per-user settings record. Every field group is independently defaulted,
/// so a record deserialized from a partial payload still has sane values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub display: DisplayPreferences,
    #[serde(default)]
    pub notifications: NotificationPreferences,
    /// Alert opt-outs keyed by provider id. Absent entries mean alerts
    /// are on.
    #[serde(default)]
    pub subscription_alerts: HashMap<String, bool>,
}

impl Preferences {
    /// Whether alerts are enabled for a provider (default: true).
    #[must_use]
    pub fn alerts_enabled(&self, provider_id: &str) -> bool {
        self.subscription_alerts
            .get(provider_id)
            .copied()
            .unwrap_or(true)
    }
}

/// Partial update for `DisplayPreferences`. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUpdate {
    #[serde(default)]
    pub default_risk_level: Option<u8>,
    #[serde(default)]
    pub dark_mode: Option<bool>,
}

/// Partial update for `NotificationPreferences`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationUpdate {
    #[serde(default)]
    pub frequency: Option<NotificationFrequency>,
}

/// Merge-based partial update for a whole `Preferences` record.
///
/// Group-level `None` leaves the group as-is; `subscription_alerts` entries
/// are merged in on top of the existing map (never replacing it wholesale).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    #[serde(default)]
    pub display: Option<DisplayUpdate>,
    #[serde(default)]
    pub notifications: Option<NotificationUpdate>,
    #[serde(default)]
    pub subscription_alerts: Option<HashMap<String, bool>>,
}

impl Preferences {
    /// Apply a partial update in place: specified fields win, everything
    /// else keeps its current value.
    pub fn merge(&mut self, update: PreferencesUpdate) {
        if let Some(display) = update.display {
            if let Some(level) = display.default_risk_level {
                self.display.default_risk_level = level;
            }
            if let Some(dark) = display.dark_mode {
                self.display.dark_mode = dark;
            }
        }
        if let Some(notifications) = update.notifications {
            if let Some(frequency) = notifications.frequency {
                self.notifications.frequency = frequency;
            }
        }
        if let Some(alerts) = update.subscription_alerts {
            self.subscription_alerts.extend(alerts);
        }
    }
}
