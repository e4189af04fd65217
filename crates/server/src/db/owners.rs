//! Owner repository for database operations.
//!
//! Owners are a separate principal table from users, with the same shape.

use sqlx::PgPool;

use bodega_core::Email;

use super::RepositoryError;
use crate::models::user::Owner;

#[derive(sqlx::FromRow)]
struct OwnerAuthRow {
    #[sqlx(flatten)]
    owner: Owner,
    password_hash: String,
}

/// Repository for owner database operations.
pub struct OwnerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OwnerRepository<'a> {
    /// Create a new owner repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new owner with a pre-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &str,
        email: &Email,
        password_hash: &str,
        phone: Option<&str>,
    ) -> Result<Owner, RepositoryError> {
        sqlx::query_as::<_, Owner>(
            r"
            INSERT INTO owners (name, email, password_hash, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone, created_at
            ",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(phone)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })
    }

    /// Get an owner and their password hash by email.
    ///
    /// Returns `None` if no account exists for the email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(Owner, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, OwnerAuthRow>(
            r"
            SELECT id, name, email, phone, created_at, password_hash
            FROM owners
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| (r.owner, r.password_hash)))
    }
}
