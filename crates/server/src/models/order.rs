//! Order domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use bodega_core::{OrderId, OrderStatus, ProductId, UserId};

/// An order row.
///
/// Created only by the checkout engine, one row per cart line. `ordered_at`
/// is set at creation and never changes; `fulfilled_at` is non-null exactly
/// when `status` is [`OrderStatus::Fulfilled`]. Orders are never deleted by
/// the application.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Ordering user.
    pub user_id: UserId,
    /// Ordered product.
    pub product_id: ProductId,
    /// Ordered quantity.
    pub quantity: i32,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub ordered_at: DateTime<Utc>,
    /// When the order was fulfilled, if it has been.
    pub fulfilled_at: Option<DateTime<Utc>>,
}

/// An order joined with its product's name, as returned by the owner-facing
/// order listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderDetail {
    /// Unique order ID.
    pub id: OrderId,
    /// Ordering user.
    pub user_id: UserId,
    /// Ordered product.
    pub product_id: ProductId,
    /// Ordered quantity.
    pub quantity: i32,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub ordered_at: DateTime<Utc>,
    /// When the order was fulfilled, if it has been.
    pub fulfilled_at: Option<DateTime<Utc>>,
    /// Product name (joined).
    pub product_name: String,
}
