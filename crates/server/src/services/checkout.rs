//! Checkout engine: drains a user's cart into order records.
//!
//! The whole transition runs in one transaction. The cart rows are read with
//! a row lock, one order is inserted per line, and exactly the rows that
//! were read are deleted. A concurrent `add to cart` for the same user
//! either waits on the lock or lands after the read, in which case its line
//! survives for the next checkout instead of being silently dropped. On any
//! failure the transaction rolls back and the cart is untouched.

use serde::Serialize;
use sqlx::PgPool;
use thiserror::Error;

use bodega_core::{CartLineId, OrderStatus, ProductId, UserId};

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The user's cart has no lines; nothing was created.
    #[error("cart is empty")]
    EmptyCart,

    /// Database error from sqlx. The transaction was rolled back.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result of a successful checkout.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CheckoutSummary {
    /// Number of order rows created (one per cart line).
    pub orders_placed: usize,
}

/// A cart line as read under the row lock.
#[derive(sqlx::FromRow)]
struct PendingLine {
    id: CartLineId,
    product_id: ProductId,
    quantity: i32,
}

/// Converts carts into orders.
pub struct CheckoutEngine<'a> {
    pool: &'a PgPool,
}

impl<'a> CheckoutEngine<'a> {
    /// Create a new checkout engine.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Convert all of a user's cart lines into pending orders and empty the
    /// cart, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no lines; no
    /// side effects occur. Returns [`CheckoutError::Database`] if any write
    /// fails; the transaction is rolled back and the cart is unchanged.
    pub async fn checkout(&self, user_id: UserId) -> Result<CheckoutSummary, CheckoutError> {
        let mut tx = self.pool.begin().await?;

        // FOR UPDATE serializes against concurrent mutation of this cart.
        let lines: Vec<PendingLine> = sqlx::query_as(
            r"
            SELECT id, product_id, quantity
            FROM cart
            WHERE user_id = $1
            ORDER BY id
            FOR UPDATE
            ",
        )
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await?;

        if lines.is_empty() {
            // Dropping the transaction rolls it back.
            return Err(CheckoutError::EmptyCart);
        }

        for line in &lines {
            sqlx::query(
                r"
                INSERT INTO orders (user_id, product_id, quantity, status, ordered_at)
                VALUES ($1, $2, $3, $4, now())
                ",
            )
            .bind(user_id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(OrderStatus::Pending)
            .execute(&mut *tx)
            .await?;
        }

        // Delete only the rows that were read: a line added after the read
        // belongs to the next checkout.
        let line_ids: Vec<i32> = lines.iter().map(|l| l.id.as_i32()).collect();
        sqlx::query("DELETE FROM cart WHERE id = ANY($1)")
            .bind(line_ids.as_slice())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            user_id = %user_id,
            orders_placed = lines.len(),
            "checkout complete"
        );

        Ok(CheckoutSummary {
            orders_placed: lines.len(),
        })
    }
}
