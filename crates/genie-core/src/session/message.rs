//! Chat message types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::Card;

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message typed (or clicked) by the traveller.
    User,
    /// Canned reply from the genie.
    Assistant,
}

/// A single message in the chat history.
///
/// Messages are append-only; the list is only ever cleared wholesale on a
/// session reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message id (UUID v4).
    pub id: String,
    /// The role of the message sender.
    pub role: MessageRole,
    /// Text shown in the chat bubble.
    pub content: String,
    /// Optional structured card drawn under the bubble.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}

impl ChatMessage {
    fn new(role: MessageRole, content: impl Into<String>, card: Option<Card>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            card,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content, None)
    }

    /// Creates an assistant message with an optional card.
    pub fn assistant(content: impl Into<String>, card: Option<Card>) -> Self {
        Self::new(MessageRole::Assistant, content, card)
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}
