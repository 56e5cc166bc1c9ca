//! Farming chat assistant.
//!
//! Online mode walks a keyword rule chain; offline mode looks queries up
//! in a small table of predefined answers.

mod assistant;
mod error;
mod offline;
mod rules;
mod types;

pub use assistant::{Assistant, Conversation, SUGGESTED_QUERIES, WELCOME};
pub use error::AssistantError;
pub use offline::{OfflineEntry, OfflineResponder, OFFLINE_NOTICE, OFFLINE_RESPONSES};
pub use rules::{OnlineResponder, Topic, FALLBACK};
pub use types::*;
