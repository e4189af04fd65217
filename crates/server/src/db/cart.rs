//! Cart repository for database operations.
//!
//! Cart lines are unique per (user, product). Adding a product that is
//! already in the cart increments the existing line rather than creating a
//! duplicate, so removal and checkout always see at most one line per
//! product.

use sqlx::PgPool;

use bodega_core::{ProductId, UserId};

use super::RepositoryError;
use crate::models::cart::{CartLine, CartLineDetail};

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a product to a user's cart.
    ///
    /// Upserts on (user, product): a second add for the same product
    /// increments the existing line's quantity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the user or product reference
    /// is invalid. Returns `RepositoryError::Database` for other failures.
    pub async fn add_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartLine, RepositoryError> {
        sqlx::query_as::<_, CartLine>(
            r"
            INSERT INTO cart (user_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, product_id)
            DO UPDATE SET quantity = cart.quantity + EXCLUDED.quantity
            RETURNING id, user_id, product_id, quantity, created_at
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::Conflict("unknown user or product".to_owned());
            }
            RepositoryError::Database(e)
        })
    }

    /// List a user's cart lines joined with product name and image.
    ///
    /// No ordering is guaranteed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_lines(&self, user_id: UserId) -> Result<Vec<CartLineDetail>, RepositoryError> {
        let lines = sqlx::query_as::<_, CartLineDetail>(
            r"
            SELECT c.id, c.product_id, c.quantity, p.name, p.image_url
            FROM cart c
            JOIN products p ON c.product_id = p.id
            WHERE c.user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(lines)
    }

    /// Remove the cart line matching (user, product).
    ///
    /// Written as a bulk match: every line for the pair is deleted, though
    /// the uniqueness constraint means there is at most one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no line matched.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn remove_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cart WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete every cart line for a user.
    ///
    /// Idempotent: clearing an already-empty cart succeeds.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn clear(&self, user_id: UserId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
