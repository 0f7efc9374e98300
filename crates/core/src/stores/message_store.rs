use std::sync::{Mutex, MutexGuard};

use tracing::debug;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::message::Message;

/// Append-only store of adviser-to-research-team messages.
///
/// Volatile: all messages are lost when the store is dropped.
/// A single mutex serialises writers.
pub struct MessageStore {
    messages: Mutex<Vec<Message>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Append a new message. Subject and body must be non-empty after
    /// trimming.
    pub fn send(
        &self,
        user_id: &str,
        user_name: &str,
        user_firm: &str,
        subject: &str,
        body: &str,
        provider: Option<(&str, &str)>,
    ) -> Result<Message, CoreError> {
        if subject.trim().is_empty() {
            return Err(CoreError::ValidationError("subject must not be empty".into()));
        }
        if body.trim().is_empty() {
            return Err(CoreError::ValidationError("body must not be empty".into()));
        }

        let mut message = Message::new(user_id, user_name, user_firm, subject, body);
        if let Some((provider_id, provider_name)) = provider {
            message = message.about_provider(provider_id, provider_name);
        }
        debug!(user_id, message_id = %message.id, "message stored");

        self.lock().push(message.clone());
        Ok(message)
    }

    /// All messages for a user, newest first.
    #[must_use]
    pub fn messages_for(&self, user_id: &str) -> Vec<Message> {
        let mut messages: Vec<Message> = self
            .lock()
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages
    }

    /// A specific message, only if it belongs to the user.
    #[must_use]
    pub fn message(&self, message_id: Uuid, user_id: &str) -> Option<Message> {
        self.lock()
            .iter()
            .find(|m| m.id == message_id && m.user_id == user_id)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Message>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}
