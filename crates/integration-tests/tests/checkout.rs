//! Integration tests for the checkout engine.
//!
//! Checkout is the one multi-table transition in the system: it must create
//! exactly one pending order per cart line, drain the cart it read, and do
//! nothing at all when the cart is empty.

use sqlx::PgPool;

use bodega_core::OrderStatus;
use bodega_integration_tests::{seed_product, seed_user};
use bodega_server::db::{CartRepository, OrderRepository};
use bodega_server::services::checkout::{CheckoutEngine, CheckoutError};

#[sqlx::test(migrations = "../server/migrations")]
async fn test_empty_cart_checkout_fails_without_side_effects(pool: PgPool) {
    let user_id = seed_user(&pool, "shopper@example.com").await;

    let result = CheckoutEngine::new(&pool).checkout(user_id).await;
    assert!(matches!(result, Err(CheckoutError::EmptyCart)));

    let orders = OrderRepository::new(&pool)
        .list()
        .await
        .expect("list orders");
    assert!(orders.is_empty());
}

#[sqlx::test(migrations = "../server/migrations")]
async fn test_checkout_creates_one_order_per_line_and_drains_cart(pool: PgPool) {
    let user_id = seed_user(&pool, "shopper@example.com").await;
    let apples = seed_product(&pool, "Apples").await;
    let coffee = seed_product(&pool, "Coffee").await;

    let cart = CartRepository::new(&pool);
    cart.add_line(user_id, apples, 2).await.expect("add apples");
    cart.add_line(user_id, coffee, 1).await.expect("add coffee");

    let summary = CheckoutEngine::new(&pool)
        .checkout(user_id)
        .await
        .expect("checkout");
    assert_eq!(summary.orders_placed, 2);

    let orders = OrderRepository::new(&pool)
        .list()
        .await
        .expect("list orders");
    assert_eq!(orders.len(), 2);
    for order in &orders {
        assert_eq!(order.user_id, user_id);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.fulfilled_at.is_none());
    }

    let apples_order = orders
        .iter()
        .find(|o| o.product_id == apples)
        .expect("order for apples");
    assert_eq!(apples_order.quantity, 2);

    let coffee_order = orders
        .iter()
        .find(|o| o.product_id == coffee)
        .expect("order for coffee");
    assert_eq!(coffee_order.quantity, 1);

    let lines = cart.list_lines(user_id).await.expect("list cart");
    assert!(lines.is_empty());
}

#[sqlx::test(migrations = "../server/migrations")]
async fn test_second_checkout_fails_once_cart_is_drained(pool: PgPool) {
    let user_id = seed_user(&pool, "shopper@example.com").await;
    let apples = seed_product(&pool, "Apples").await;

    CartRepository::new(&pool)
        .add_line(user_id, apples, 1)
        .await
        .expect("add line");

    CheckoutEngine::new(&pool)
        .checkout(user_id)
        .await
        .expect("first checkout");

    let second = CheckoutEngine::new(&pool).checkout(user_id).await;
    assert!(matches!(second, Err(CheckoutError::EmptyCart)));

    // The first checkout's orders are untouched.
    let orders = OrderRepository::new(&pool)
        .list()
        .await
        .expect("list orders");
    assert_eq!(orders.len(), 1);
}

#[sqlx::test(migrations = "../server/migrations")]
async fn test_checkout_leaves_other_carts_alone(pool: PgPool) {
    let alice = seed_user(&pool, "alice@example.com").await;
    let bob = seed_user(&pool, "bob@example.com").await;
    let apples = seed_product(&pool, "Apples").await;

    let cart = CartRepository::new(&pool);
    cart.add_line(alice, apples, 2).await.expect("alice's line");
    cart.add_line(bob, apples, 5).await.expect("bob's line");

    let summary = CheckoutEngine::new(&pool)
        .checkout(alice)
        .await
        .expect("checkout");
    assert_eq!(summary.orders_placed, 1);

    let bobs_lines = cart.list_lines(bob).await.expect("bob's cart");
    assert_eq!(bobs_lines.len(), 1);
    let line = bobs_lines.first().expect("bob's line survives");
    assert_eq!(line.quantity, 5);
}
