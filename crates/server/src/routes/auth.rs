//! Account route handlers: registration, login, logout.
//!
//! Successful logins store the principal's identity in the session. Owner
//! sessions unlock the owner-only catalog and fulfillment routes.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{clear_session, set_current_owner, set_current_user};
use crate::models::{CurrentOwner, CurrentUser};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// POST /api/register - create a customer account.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.pool());
    let user = auth
        .register_user(
            &payload.name,
            &payload.email,
            &payload.password,
            payload.phone.as_deref(),
        )
        .await?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully!", "user": user })),
    ))
}

/// POST /api/registerOwner - create an owner account.
pub async fn register_owner(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.pool());
    let owner = auth
        .register_owner(
            &payload.name,
            &payload.email,
            &payload.password,
            payload.phone.as_deref(),
        )
        .await?;

    tracing::info!(owner_id = %owner.id, "owner registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Owner registered successfully!", "user": owner })),
    ))
}

/// POST /api/login - authenticate a customer and start a session.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.pool());
    let user = auth.login_user(&payload.email, &payload.password).await?;

    let identity = CurrentUser {
        id: user.id,
        email: user.email.clone(),
    };
    set_current_user(&session, &identity)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "success": true, "user": user })))
}

/// POST /api/loginOwner - authenticate an owner and start a session.
pub async fn login_owner(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.pool());
    let owner = auth.login_owner(&payload.email, &payload.password).await?;

    let identity = CurrentOwner {
        id: owner.id,
        email: owner.email.clone(),
    };
    set_current_owner(&session, &identity)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "success": true, "user": owner })))
}

/// POST /api/logout - clear the session.
pub async fn logout(session: Session) -> Result<impl IntoResponse> {
    clear_session(&session)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "success": true })))
}
