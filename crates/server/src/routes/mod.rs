//! HTTP route handlers for the ordering API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                              - Health check
//!
//! # Accounts
//! POST /api/register                        - Create customer account
//! POST /api/registerOwner                   - Create owner account
//! POST /api/login                           - Customer login
//! POST /api/loginOwner                      - Owner login
//! POST /api/logout                          - Clear session
//!
//! # Catalog
//! POST   /api/products                      - Add product (owner)
//! GET    /api/products                      - List products
//! DELETE /api/products/:id                  - Delete product (owner)
//!
//! # Cart
//! POST   /api/cart                          - Add cart line
//! GET    /api/cart/:user_id                 - List cart (joined)
//! DELETE /api/cart/:user_id/:product_id     - Remove matching lines
//! DELETE /api/cart/:user_id                 - Clear cart
//!
//! # Orders
//! POST /api/orders                          - Checkout
//! GET  /api/orders                          - List orders (owner, joined)
//! PUT  /api/orders/:id/status               - Set status (owner)
//! ```

pub mod auth;
pub mod cart;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Build the API router.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        // Accounts
        .route("/api/register", post(auth::register))
        .route("/api/registerOwner", post(auth::register_owner))
        .route("/api/login", post(auth::login))
        .route("/api/loginOwner", post(auth::login_owner))
        .route("/api/logout", post(auth::logout))
        // Catalog
        .route("/api/products", post(products::create).get(products::list))
        .route("/api/products/{id}", delete(products::remove))
        // Cart
        .route("/api/cart", post(cart::add))
        .route("/api/cart/{user_id}", get(cart::list).delete(cart::clear))
        .route("/api/cart/{user_id}/{product_id}", delete(cart::remove))
        // Orders
        .route("/api/orders", post(orders::checkout).get(orders::list))
        .route("/api/orders/{id}/status", put(orders::set_status))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Router construction panics on malformed route patterns.
    #[test]
    fn test_router_builds() {
        let _router = routes();
    }
}
