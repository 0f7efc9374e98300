use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::models::subscription::Subscription;

/// Per-user/provider subscription state.
///
/// Rows are append-only: unsubscribing flips the active flag and a later
/// re-subscribe appends a fresh row, so the full history stays available.
/// Invariant: at most one active row per (user, provider) pair. `subscribe`
/// does its existence check and the append under one lock.
pub struct SubscriptionStore {
    subscriptions: Mutex<Vec<Subscription>>,
}

impl SubscriptionStore {
    pub fn new() -> Self {
        Self {
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe a user to a provider's range.
    ///
    /// Idempotent: if an active row already exists for the pair it is
    /// returned unchanged, keeping its original id and timestamp.
    pub fn subscribe(
        &self,
        user_id: &str,
        user_email: &str,
        provider_id: &str,
        provider_name: &str,
    ) -> Subscription {
        let mut subscriptions = self.lock();

        if let Some(existing) = subscriptions
            .iter()
            .find(|s| s.user_id == user_id && s.provider_id == provider_id && s.active)
        {
            return existing.clone();
        }

        let subscription = Subscription::new(user_id, user_email, provider_id, provider_name);
        debug!(user_id, provider_id, subscription_id = %subscription.id, "subscribed");
        subscriptions.push(subscription.clone());
        subscription
    }

    /// Deactivate the active row for a pair. Returns `false` when there was
    /// nothing to deactivate (already unsubscribed, or never subscribed).
    pub fn unsubscribe(&self, user_id: &str, provider_id: &str) -> bool {
        let mut subscriptions = self.lock();
        for subscription in subscriptions.iter_mut() {
            if subscription.user_id == user_id
                && subscription.provider_id == provider_id
                && subscription.active
            {
                subscription.active = false;
                debug!(user_id, provider_id, "unsubscribed");
                return true;
            }
        }
        false
    }

    /// All active subscriptions for a user, in creation order.
    #[must_use]
    pub fn subscriptions_for(&self, user_id: &str) -> Vec<Subscription> {
        self.lock()
            .iter()
            .filter(|s| s.user_id == user_id && s.active)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn is_subscribed(&self, user_id: &str, provider_id: &str) -> bool {
        self.lock()
            .iter()
            .any(|s| s.user_id == user_id && s.provider_id == provider_id && s.active)
    }

    /// Active subscribers of a provider, the alert fan-out list.
    /// Delivering the alerts is outside this crate.
    #[must_use]
    pub fn subscribers_of(&self, provider_id: &str) -> Vec<Subscription> {
        self.lock()
            .iter()
            .filter(|s| s.provider_id == provider_id && s.active)
            .cloned()
            .collect()
    }

    /// Total rows including inactive history.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Subscription>> {
        self.subscriptions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SubscriptionStore {
    fn default() -> Self {
        Self::new()
    }
}
