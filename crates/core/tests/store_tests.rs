// ═══════════════════════════════════════════════════════════════════
// Store Tests — MessageStore, SubscriptionStore, PreferencesStore
// ═══════════════════════════════════════════════════════════════════

use uuid::Uuid;

use bridge_core::errors::CoreError;
use bridge_core::models::preferences::{
    DisplayUpdate, NotificationFrequency, NotificationUpdate, PreferencesUpdate,
};
use bridge_core::stores::message_store::MessageStore;
use bridge_core::stores::preferences_store::PreferencesStore;
use bridge_core::stores::subscription_store::SubscriptionStore;

mod messages {
    use super::*;

    #[test]
    fn send_and_list_newest_first() {
        let store = MessageStore::new();

        store
            .send("user-001", "Demo", "Firm", "First question", "Body one", None)
            .unwrap();
        store
            .send("user-001", "Demo", "Firm", "Second question", "Body two", None)
            .unwrap();

        let messages = store.messages_for("user-001");
        assert_eq!(messages.len(), 2);
        assert!(messages[0].created_at >= messages[1].created_at);
    }

    #[test]
    fn blank_subject_or_body_is_rejected() {
        let store = MessageStore::new();

        let result = store.send("user-001", "Demo", "Firm", "   ", "Body", None);
        assert!(matches!(result, Err(CoreError::ValidationError(_))));

        let result = store.send("user-001", "Demo", "Firm", "Subject", "\n\t ", None);
        assert!(matches!(result, Err(CoreError::ValidationError(_))));

        assert!(store.is_empty());
    }

    #[test]
    fn provider_link_is_stored_when_given() {
        let store = MessageStore::new();

        let message = store
            .send(
                "user-001",
                "Demo",
                "Firm",
                "About Vanguard",
                "Question body",
                Some(("vanguard", "Vanguard")),
            )
            .unwrap();
        assert_eq!(message.provider_id.as_deref(), Some("vanguard"));
        assert_eq!(message.provider_name.as_deref(), Some("Vanguard"));
    }

    #[test]
    fn lookup_is_owner_scoped() {
        let store = MessageStore::new();

        let message = store
            .send("user-001", "Demo", "Firm", "Subject", "Body", None)
            .unwrap();

        assert!(store.message(message.id, "user-001").is_some());
        // Someone else's id never resolves another user's message
        assert!(store.message(message.id, "user-002").is_none());
        assert!(store.message(Uuid::new_v4(), "user-001").is_none());
    }

    #[test]
    fn listings_are_per_user() {
        let store = MessageStore::new();
        store
            .send("user-001", "Demo", "Firm", "Mine", "Body", None)
            .unwrap();
        store
            .send("user-002", "Other", "Firm", "Theirs", "Body", None)
            .unwrap();

        let mine = store.messages_for("user-001");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].subject, "Mine");
        assert_eq!(store.len(), 2);
    }
}

mod subscriptions {
    use super::*;

    #[test]
    fn subscribe_is_idempotent() {
        let store = SubscriptionStore::new();

        let first = store.subscribe("user-001", "demo@bridge.co.uk", "vanguard", "Vanguard");
        let second = store.subscribe("user-001", "demo@bridge.co.uk", "vanguard", "Vanguard");

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);
        assert_eq!(store.row_count(), 1);
    }

    #[test]
    fn unsubscribe_flips_the_flag_and_keeps_the_row() {
        let store = SubscriptionStore::new();
        store.subscribe("user-001", "demo@bridge.co.uk", "tatton", "Tatton");

        assert!(store.unsubscribe("user-001", "tatton"));
        assert!(!store.is_subscribed("user-001", "tatton"));
        // History row survives deactivation
        assert_eq!(store.row_count(), 1);
        assert!(store.subscriptions_for("user-001").is_empty());
    }

    #[test]
    fn unsubscribe_without_an_active_row_returns_false() {
        let store = SubscriptionStore::new();
        assert!(!store.unsubscribe("user-001", "vanguard"));

        store.subscribe("user-001", "demo@bridge.co.uk", "vanguard", "Vanguard");
        assert!(store.unsubscribe("user-001", "vanguard"));
        // Second unsubscribe of the same pair
        assert!(!store.unsubscribe("user-001", "vanguard"));
    }

    #[test]
    fn resubscribe_appends_a_fresh_row() {
        let store = SubscriptionStore::new();

        let first = store.subscribe("user-001", "demo@bridge.co.uk", "eq", "EQ Investors");
        store.unsubscribe("user-001", "eq");
        let second = store.subscribe("user-001", "demo@bridge.co.uk", "eq", "EQ Investors");

        assert_ne!(first.id, second.id);
        assert_eq!(store.row_count(), 2);
        assert!(store.is_subscribed("user-001", "eq"));
        assert_eq!(store.subscriptions_for("user-001").len(), 1);
    }

    #[test]
    fn subscribers_of_lists_only_active_rows() {
        let store = SubscriptionStore::new();
        store.subscribe("user-001", "a@x.co.uk", "parmenion", "Parmenion");
        store.subscribe("user-002", "b@x.co.uk", "parmenion", "Parmenion");
        store.subscribe("user-003", "c@x.co.uk", "vanguard", "Vanguard");
        store.unsubscribe("user-002", "parmenion");

        let subscribers = store.subscribers_of("parmenion");
        assert_eq!(subscribers.len(), 1);
        assert_eq!(subscribers[0].user_id, "user-001");
    }
}

mod preferences {
    use super::*;

    #[test]
    fn unknown_user_gets_defaults() {
        let store = PreferencesStore::new();
        let prefs = store.preferences_for("user-001");
        assert_eq!(prefs.display.default_risk_level, 7);
        assert!(store.should_alert("user-001", "vanguard"));
    }

    #[test]
    fn update_merges_into_the_stored_record() {
        let store = PreferencesStore::new();

        store.update(
            "user-001",
            PreferencesUpdate {
                display: Some(DisplayUpdate {
                    default_risk_level: Some(5),
                    dark_mode: None,
                }),
                notifications: None,
                subscription_alerts: None,
            },
        );
        let prefs = store.update(
            "user-001",
            PreferencesUpdate {
                display: Some(DisplayUpdate {
                    default_risk_level: None,
                    dark_mode: Some(true),
                }),
                notifications: Some(NotificationUpdate {
                    frequency: Some(NotificationFrequency::Weekly),
                }),
                subscription_alerts: None,
            },
        );

        // First update survives the second
        assert_eq!(prefs.display.default_risk_level, 5);
        assert!(prefs.display.dark_mode);
        assert_eq!(prefs.notifications.frequency, NotificationFrequency::Weekly);
    }

    #[test]
    fn alert_toggle_round_trip() {
        let store = PreferencesStore::new();

        store.set_subscription_alert("user-001", "tatton", false);
        assert!(!store.should_alert("user-001", "tatton"));
        // Other providers are unaffected
        assert!(store.should_alert("user-001", "vanguard"));

        store.set_subscription_alert("user-001", "tatton", true);
        assert!(store.should_alert("user-001", "tatton"));
    }

    #[test]
    fn records_are_per_user() {
        let store = PreferencesStore::new();
        store.set_subscription_alert("user-001", "eq", false);

        assert!(!store.should_alert("user-001", "eq"));
        assert!(store.should_alert("user-002", "eq"));
    }
}
