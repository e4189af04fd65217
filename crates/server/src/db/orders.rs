//! Order repository for database operations.
//!
//! Orders are written only by the checkout engine
//! (`crate::services::checkout`); this repository covers the owner-facing
//! side: listing and the fulfillment status toggle.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use bodega_core::{OrderId, OrderStatus};

use super::RepositoryError;
use crate::models::order::{Order, OrderDetail};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every order joined with its product's name, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<OrderDetail>, RepositoryError> {
        let orders = sqlx::query_as::<_, OrderDetail>(
            r"
            SELECT o.id, o.user_id, o.product_id, o.quantity, o.status,
                   o.ordered_at, o.fulfilled_at,
                   p.name AS product_name
            FROM orders o
            JOIN products p ON o.product_id = p.id
            ORDER BY o.ordered_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Set an order's fulfillment status.
    ///
    /// The `fulfilled_at` pairing is derived here so the invariant holds no
    /// matter what the caller sends: `Fulfilled` stores the supplied
    /// timestamp (or now), `Pending` clears it to NULL.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order matched.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        fulfilled_at: Option<DateTime<Utc>>,
    ) -> Result<Order, RepositoryError> {
        let fulfilled_at = match status {
            OrderStatus::Fulfilled => Some(fulfilled_at.unwrap_or_else(Utc::now)),
            OrderStatus::Pending => None,
        };

        let order = sqlx::query_as::<_, Order>(
            r"
            UPDATE orders
            SET status = $1, fulfilled_at = $2
            WHERE id = $3
            RETURNING id, user_id, product_id, quantity, status,
                      ordered_at, fulfilled_at
            ",
        )
        .bind(status)
        .bind(fulfilled_at)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(order)
    }
}
