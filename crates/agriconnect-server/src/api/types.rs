//! API request and response types.

use agri_assistant::{Connectivity, SuggestedQuery};
use serde::{Deserialize, Serialize};
use session_store::Identity;

/// Current session state.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub user: Option<Identity>,
}

impl SessionResponse {
    pub fn from_current(user: Option<&Identity>) -> Self {
        Self {
            authenticated: user.is_some(),
            user: user.cloned(),
        }
    }
}

/// Response after login or registration.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: Identity,
    pub message: String,
}

/// Response after logout.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// List of registered identities.
#[derive(Debug, Serialize)]
pub struct IdentitiesResponse {
    pub identities: Vec<Identity>,
    pub total: usize,
}

/// Question for the assistant.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub message: String,
}

/// Assistant reply.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub reply: String,
    pub mode: Connectivity,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: &'static [SuggestedQuery],
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub identity_count: usize,
    pub assistant_mode: Connectivity,
}
