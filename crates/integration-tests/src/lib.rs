//! Database integration tests for bodega.
//!
//! Each test runs against its own throwaway database: `#[sqlx::test]`
//! provisions one from `DATABASE_URL` and applies the server migrations
//! before the test body runs.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database
//! export DATABASE_URL=postgres://localhost/bodega
//!
//! cargo test -p bodega-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `accounts` - Registration and login through the auth service
//! - `cart` - Cart line upsert, removal and clearing
//! - `checkout` - Cart-to-orders conversion and its failure modes
//! - `orders` - Fulfillment status toggling

use sqlx::PgPool;

use bodega_core::{Email, ProductId, UserId};
use bodega_server::db::{ProductRepository, UserRepository};

/// Placeholder hash for rows seeded below the auth service. Tests that
/// exercise login go through `AuthService` and store a real argon2 hash.
const SEEDED_HASH: &str = "seeded-not-a-real-hash";

/// Seed a user account and return its ID.
///
/// # Panics
///
/// Panics if the insert fails; a broken fixture fails the test.
pub async fn seed_user(pool: &PgPool, email: &str) -> UserId {
    let email = Email::parse(email).expect("seed email is valid");
    let user = UserRepository::new(pool)
        .create("Test Shopper", &email, SEEDED_HASH, None)
        .await
        .expect("seed user");
    user.id
}

/// Seed a catalog product and return its ID.
///
/// # Panics
///
/// Panics if the insert fails; a broken fixture fails the test.
pub async fn seed_product(pool: &PgPool, name: &str) -> ProductId {
    let product = ProductRepository::new(pool)
        .create(name, "/uploads/placeholder.png", 25)
        .await
        .expect("seed product");
    product.id
}
