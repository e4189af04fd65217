//! Integration tests for the order status toggle.
//!
//! The repository owns the `fulfilled_at` pairing: `Fulfilled` always
//! carries a timestamp, `Pending` never does, whatever the caller sends.

use chrono::Utc;
use sqlx::PgPool;

use bodega_core::{OrderId, OrderStatus};
use bodega_integration_tests::{seed_product, seed_user};
use bodega_server::db::{CartRepository, OrderRepository, RepositoryError};
use bodega_server::services::checkout::CheckoutEngine;

/// Seed an account and a product, buy one, and return the order's ID.
async fn place_order(pool: &PgPool) -> OrderId {
    let user_id = seed_user(pool, "shopper@example.com").await;
    let product_id = seed_product(pool, "Beans").await;

    CartRepository::new(pool)
        .add_line(user_id, product_id, 1)
        .await
        .expect("add line");
    CheckoutEngine::new(pool)
        .checkout(user_id)
        .await
        .expect("checkout");

    let orders = OrderRepository::new(pool).list().await.expect("list orders");
    orders.first().expect("one order").id
}

#[sqlx::test(migrations = "../server/migrations")]
async fn test_status_toggle_is_invertible(pool: PgPool) {
    let id = place_order(&pool).await;
    let repo = OrderRepository::new(&pool);

    let fulfilled = repo
        .set_status(id, OrderStatus::Fulfilled, Some(Utc::now()))
        .await
        .expect("mark fulfilled");
    assert_eq!(fulfilled.status, OrderStatus::Fulfilled);
    assert!(fulfilled.fulfilled_at.is_some());

    let reverted = repo
        .set_status(id, OrderStatus::Pending, None)
        .await
        .expect("revert to pending");
    assert_eq!(reverted.status, OrderStatus::Pending);
    assert!(reverted.fulfilled_at.is_none());
}

#[sqlx::test(migrations = "../server/migrations")]
async fn test_fulfilled_without_timestamp_gets_one(pool: PgPool) {
    let id = place_order(&pool).await;

    let order = OrderRepository::new(&pool)
        .set_status(id, OrderStatus::Fulfilled, None)
        .await
        .expect("mark fulfilled");
    assert!(order.fulfilled_at.is_some());
}

#[sqlx::test(migrations = "../server/migrations")]
async fn test_pending_ignores_a_supplied_timestamp(pool: PgPool) {
    let id = place_order(&pool).await;

    let order = OrderRepository::new(&pool)
        .set_status(id, OrderStatus::Pending, Some(Utc::now()))
        .await
        .expect("set pending");
    assert!(order.fulfilled_at.is_none());
}

#[sqlx::test(migrations = "../server/migrations")]
async fn test_set_status_on_unknown_order_is_not_found(pool: PgPool) {
    let result = OrderRepository::new(&pool)
        .set_status(OrderId::new(4242), OrderStatus::Fulfilled, None)
        .await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}
