//! Catalog route handlers.
//!
//! Listing is public; creating and deleting products require an owner
//! session.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use bodega_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireOwner;
use crate::state::AppState;

/// Product creation request body.
#[derive(Debug, Deserialize)]
pub struct CreateProductPayload {
    pub name: String,
    pub image_url: String,
    pub quantity: i32,
}

/// POST /api/products - add a product (owner only).
pub async fn create(
    RequireOwner(_owner): RequireOwner,
    State(state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("product name is required".to_string()));
    }
    if payload.quantity < 0 {
        return Err(AppError::BadRequest(
            "quantity cannot be negative".to_string(),
        ));
    }

    let product = ProductRepository::new(state.pool())
        .create(&payload.name, &payload.image_url, payload.quantity)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Product added!", "product": product })),
    ))
}

/// GET /api/products - list all products, newest first.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let products = ProductRepository::new(state.pool()).list().await?;

    Ok(Json(json!({ "products": products })))
}

/// DELETE /api/products/:id - delete a product (owner only).
pub async fn remove(
    RequireOwner(_owner): RequireOwner,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<impl IntoResponse> {
    ProductRepository::new(state.pool()).delete(id).await?;

    Ok(Json(json!({ "message": "Product deleted" })))
}
