//! Product domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use bodega_core::ProductId;

/// A catalog product.
///
/// Products are created and deleted by the owner, never updated in place.
/// `quantity` is the informational on-hand count; it is not decremented when
/// orders are placed.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Image reference served under /uploads.
    pub image_url: String,
    /// On-hand count (display only).
    pub quantity: i32,
    /// When the product was added.
    pub created_at: DateTime<Utc>,
}
