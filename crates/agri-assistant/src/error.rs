//! Assistant errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// The message was empty or whitespace only.
    #[error("Message is empty")]
    EmptyMessage,
}
