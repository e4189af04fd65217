//! Cart route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use bodega_core::{ProductId, UserId};

use crate::db::CartRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
pub struct AddLinePayload {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
}

/// POST /api/cart - add a line to a user's cart.
pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<AddLinePayload>,
) -> Result<impl IntoResponse> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be positive".to_string(),
        ));
    }

    let line = CartRepository::new(state.pool())
        .add_line(payload.user_id, payload.product_id, payload.quantity)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Item added to cart", "cart": line })),
    ))
}

/// GET /api/cart/:user_id - list a user's cart, joined with product info.
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<impl IntoResponse> {
    let lines = CartRepository::new(state.pool()).list_lines(user_id).await?;

    Ok(Json(json!({ "cart": lines })))
}

/// DELETE /api/cart/:user_id/:product_id - remove matching cart lines.
pub async fn remove(
    State(state): State<AppState>,
    Path((user_id, product_id)): Path<(UserId, ProductId)>,
) -> Result<impl IntoResponse> {
    CartRepository::new(state.pool())
        .remove_line(user_id, product_id)
        .await?;

    Ok(Json(json!({ "message": "Item removed from cart" })))
}

/// DELETE /api/cart/:user_id - clear the whole cart.
///
/// Succeeds even when the cart is already empty.
pub async fn clear(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<impl IntoResponse> {
    CartRepository::new(state.pool()).clear(user_id).await?;

    Ok(Json(json!({ "message": "Cart cleared" })))
}
