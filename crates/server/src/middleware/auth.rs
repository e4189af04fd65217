//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring an owner session in route handlers.
//! Catalog mutation and order fulfillment are owner-only operations.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_sessions::Session;

use crate::models::{CurrentOwner, CurrentUser, session_keys};

/// Extractor that requires a logged-in owner.
///
/// Rejects the request with 401 when no owner identity is in the session.
///
/// # Example
///
/// ```rust,ignore
/// async fn owner_handler(
///     RequireOwner(owner): RequireOwner,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", owner.email)
/// }
/// ```
pub struct RequireOwner(pub CurrentOwner);

/// Error returned when owner authentication is required but missing.
pub struct OwnerRejection;

impl IntoResponse for OwnerRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Owner login required" })),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for RequireOwner
where
    S: Send + Sync,
{
    type Rejection = OwnerRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts.extensions.get::<Session>().ok_or(OwnerRejection)?;

        let owner: CurrentOwner = session
            .get(session_keys::CURRENT_OWNER)
            .await
            .ok()
            .flatten()
            .ok_or(OwnerRejection)?;

        Ok(Self(owner))
    }
}

/// Helper to set the current user in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to set the current owner in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_owner(
    session: &Session,
    owner: &CurrentOwner,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_OWNER, owner).await
}

/// Helper to clear all identities from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
