//! HTTP request handlers.

use super::types::{
    AskRequest, AskResponse, AuthResponse, HealthResponse, IdentitiesResponse, LogoutResponse,
    SessionResponse, SuggestionsResponse,
};
use super::AppState;
use crate::error::ApiError;
use axum::{extract::State, Json};
use session_store::{LoginForm, RegistrationForm};
use tracing::info;

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let session = state.session.read().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        identity_count: session.count(),
        assistant_mode: state.assistant.connectivity(),
    })
}

/// Register a new identity and log it in.
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<RegistrationForm>,
) -> Result<Json<AuthResponse>, ApiError> {
    // Validate and register under one write lock so the phone check holds
    let mut session = state.session.write().await;
    let new_identity = form.validate(&session.list_identities())?;
    let user = session.register(new_identity)?;

    info!(id = %user.id, "Registration completed");

    Ok(Json(AuthResponse {
        user,
        message: "Your account has been created successfully.".to_string(),
    }))
}

/// Log in with phone and password.
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<AuthResponse>, ApiError> {
    form.validate()?;

    let mut session = state.session.write().await;
    if !session.login(&form.phone, &form.password)? {
        return Err(ApiError::InvalidCredentials);
    }

    let user = session.current().cloned().ok_or(ApiError::InvalidCredentials)?;

    Ok(Json(AuthResponse {
        user,
        message: "Logged in successfully.".to_string(),
    }))
}

/// End the current session.
pub async fn logout(State(state): State<AppState>) -> Result<Json<LogoutResponse>, ApiError> {
    state.session.write().await.logout()?;

    Ok(Json(LogoutResponse {
        message: "Logged out.".to_string(),
    }))
}

/// Get the current session.
pub async fn current_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.read().await;
    Json(SessionResponse::from_current(session.current()))
}

/// List registered identities without passwords.
pub async fn list_identities(State(state): State<AppState>) -> Json<IdentitiesResponse> {
    let identities = state.session.read().await.list_identities();
    let total = identities.len();
    Json(IdentitiesResponse { identities, total })
}

/// Ask the farming assistant a question.
pub async fn ask_assistant(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let reply = state.assistant.reply(&request.message).await?;

    Ok(Json(AskResponse {
        reply,
        mode: state.assistant.connectivity(),
    }))
}

/// Canned questions for the assistant.
pub async fn suggestions(State(state): State<AppState>) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: state.assistant.suggested_queries(),
    })
}
