//! Product repository for database operations.

use sqlx::PgPool;

use bodega_core::ProductId;

use super::RepositoryError;
use crate::models::product::Product;

/// Repository for catalog database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        name: &str,
        image_url: &str,
        quantity: i32,
    ) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (name, image_url, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, name, image_url, quantity, created_at
            ",
        )
        .bind(name)
        .bind(image_url)
        .bind(quantity)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// List all products, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, image_url, quantity, created_at
            FROM products
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Delete a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product matched.
    /// Returns `RepositoryError::Conflict` if the product is referenced by
    /// existing orders (order history is never deleted).
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_foreign_key_violation()
                {
                    return RepositoryError::Conflict(
                        "product is referenced by existing orders".to_owned(),
                    );
                }
                RepositoryError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
