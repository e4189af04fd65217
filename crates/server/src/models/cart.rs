//! Cart domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use bodega_core::{CartLineId, ProductId, UserId};

/// One cart line: a quantity of a product a user intends to purchase.
///
/// Lines are unique per (user, product); adding the same product again
/// increments the existing line instead of creating a duplicate.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartLine {
    /// Unique line ID.
    pub id: CartLineId,
    /// Owning user.
    pub user_id: UserId,
    /// Referenced product.
    pub product_id: ProductId,
    /// Requested quantity.
    pub quantity: i32,
    /// When the line was first created.
    pub created_at: DateTime<Utc>,
}

/// A cart line joined with its product's name and image, as returned by
/// the cart listing endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartLineDetail {
    /// Unique line ID.
    pub id: CartLineId,
    /// Referenced product.
    pub product_id: ProductId,
    /// Requested quantity.
    pub quantity: i32,
    /// Product name (joined).
    pub name: String,
    /// Product image (joined).
    pub image_url: String,
}
