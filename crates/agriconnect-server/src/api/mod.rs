//! HTTP API for the AgriConnect client.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use agri_assistant::Assistant;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use session_store::SessionStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Registered identities and the current session
    pub session: Arc<RwLock<SessionStore>>,
    /// Farming assistant
    pub assistant: Arc<Assistant>,
}

impl AppState {
    /// Create new application state.
    pub fn new(session: SessionStore, assistant: Assistant) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            assistant: Arc::new(assistant),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Session endpoints
        .route("/v1/register", post(handlers::register))
        .route("/v1/login", post(handlers::login))
        .route("/v1/logout", post(handlers::logout))
        .route("/v1/session", get(handlers::current_session))
        .route("/v1/identities", get(handlers::list_identities))
        // Assistant endpoints
        .route("/v1/assistant/ask", post(handlers::ask_assistant))
        .route("/v1/assistant/suggestions", get(handlers::suggestions))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
