//! Order route handlers: checkout and owner-side fulfillment.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use bodega_core::{OrderId, OrderStatus, UserId};

use crate::db::OrderRepository;
use crate::error::Result;
use crate::middleware::RequireOwner;
use crate::services::checkout::CheckoutEngine;
use crate::state::AppState;

/// Checkout request body.
#[derive(Debug, Deserialize)]
pub struct CheckoutPayload {
    pub user_id: UserId,
}

/// Status update request body.
///
/// `status` must be one of the two recognized values; anything else is
/// rejected at deserialization. `fulfilled_at` is optional - the pairing
/// with `status` is enforced server-side.
#[derive(Debug, Deserialize)]
pub struct SetStatusPayload {
    pub status: OrderStatus,
    pub fulfilled_at: Option<DateTime<Utc>>,
}

/// POST /api/orders - place an order from the user's cart.
pub async fn checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutPayload>,
) -> Result<impl IntoResponse> {
    let summary = CheckoutEngine::new(state.pool())
        .checkout(payload.user_id)
        .await?;

    Ok(Json(json!({
        "message": "Order placed successfully!",
        "orders_placed": summary.orders_placed,
    })))
}

/// GET /api/orders - list all orders, newest first (owner only).
pub async fn list(
    RequireOwner(_owner): RequireOwner,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let orders = OrderRepository::new(state.pool()).list().await?;

    Ok(Json(json!({ "orders": orders })))
}

/// PUT /api/orders/:id/status - toggle an order's fulfillment status
/// (owner only).
pub async fn set_status(
    RequireOwner(_owner): RequireOwner,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(payload): Json<SetStatusPayload>,
) -> Result<impl IntoResponse> {
    let order = OrderRepository::new(state.pool())
        .set_status(id, payload.status, payload.fulfilled_at)
        .await?;

    Ok(Json(json!({ "success": true, "order": order })))
}
