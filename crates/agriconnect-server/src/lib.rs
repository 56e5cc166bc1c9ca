//! AgriConnect server - local HTTP API for the AgriConnect client.
//!
//! Exposes:
//! - Registration, login, logout and the current session
//! - The registered identity list (passwords stripped)
//! - The farming chat assistant

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::ApiError;
