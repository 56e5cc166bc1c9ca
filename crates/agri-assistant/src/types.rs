//! Chat message and responder types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single message in an assistant conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(id: impl Into<String>, sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn user(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, Sender::User, content)
    }

    pub fn bot(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, Sender::Bot, content)
    }
}

/// Which answer set the assistant draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    #[default]
    Online,
    /// Only the predefined offline answers are available.
    Offline,
}

/// A canned question offered to the user.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestedQuery {
    pub text: &'static str,
    /// Icon hint for the client (e.g. "leaf", "cloud-rain").
    pub icon: &'static str,
}

/// Produces an answer for a normalized (lower-cased, trimmed) query.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Responder name, for logging.
    fn name(&self) -> &str;

    /// Answer the query. Always returns some text; unmatched queries get a
    /// fallback answer.
    async fn respond(&self, query: &str) -> String;
}
