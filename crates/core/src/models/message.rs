use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery status of an adviser message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Delivered to the research team, awaiting a reply
    Sent,
    /// A reply has been recorded
    Replied,
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageStatus::Sent => write!(f, "sent"),
            MessageStatus::Replied => write!(f, "replied"),
        }
    }
}

/// An adviser-to-research-team message.
///
/// Append-only: once stored, only the reply fields may ever change, and no
/// operation in this crate mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub user_firm: String,
    pub subject: String,
    pub body: String,
    /// Provider the message is about, if any
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    pub status: MessageStatus,
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub replied_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        user_firm: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            user_firm: user_firm.into(),
            subject: subject.into(),
            body: body.into(),
            provider_id: None,
            provider_name: None,
            status: MessageStatus::Sent,
            reply: None,
            replied_at: None,
            created_at: Utc::now(),
        }
    }

    /// Attach the provider the message concerns.
    pub fn about_provider(
        mut self,
        provider_id: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> Self {
        self.provider_id = Some(provider_id.into());
        self.provider_name = Some(provider_name.into());
        self
    }
}
