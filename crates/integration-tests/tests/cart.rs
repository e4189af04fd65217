//! Integration tests for the cart repository.

use sqlx::PgPool;

use bodega_integration_tests::{seed_product, seed_user};
use bodega_server::db::{CartRepository, RepositoryError};

#[sqlx::test(migrations = "../server/migrations")]
async fn test_add_then_list_shows_the_joined_line(pool: PgPool) {
    let user_id = seed_user(&pool, "shopper@example.com").await;
    let product_id = seed_product(&pool, "Olive Oil").await;

    let cart = CartRepository::new(&pool);
    cart.add_line(user_id, product_id, 3).await.expect("add line");

    let lines = cart.list_lines(user_id).await.expect("list lines");
    assert_eq!(lines.len(), 1);
    let line = lines.first().expect("one line");
    assert_eq!(line.product_id, product_id);
    assert_eq!(line.quantity, 3);
    assert_eq!(line.name, "Olive Oil");
}

#[sqlx::test(migrations = "../server/migrations")]
async fn test_adding_same_product_increments_existing_line(pool: PgPool) {
    let user_id = seed_user(&pool, "shopper@example.com").await;
    let product_id = seed_product(&pool, "Olive Oil").await;

    let cart = CartRepository::new(&pool);
    cart.add_line(user_id, product_id, 2).await.expect("first add");
    cart.add_line(user_id, product_id, 3).await.expect("second add");

    let lines = cart.list_lines(user_id).await.expect("list lines");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines.first().expect("one line").quantity, 5);
}

#[sqlx::test(migrations = "../server/migrations")]
async fn test_remove_line_for_absent_product_is_not_found(pool: PgPool) {
    let user_id = seed_user(&pool, "shopper@example.com").await;
    let in_cart = seed_product(&pool, "Olive Oil").await;
    let never_added = seed_product(&pool, "Vinegar").await;

    let cart = CartRepository::new(&pool);
    cart.add_line(user_id, in_cart, 1).await.expect("add line");

    let result = cart.remove_line(user_id, never_added).await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));

    // The failed removal left the cart untouched.
    let lines = cart.list_lines(user_id).await.expect("list lines");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines.first().expect("one line").product_id, in_cart);
}

#[sqlx::test(migrations = "../server/migrations")]
async fn test_clear_is_idempotent(pool: PgPool) {
    let user_id = seed_user(&pool, "shopper@example.com").await;
    let product_id = seed_product(&pool, "Olive Oil").await;

    let cart = CartRepository::new(&pool);
    cart.add_line(user_id, product_id, 2).await.expect("add line");

    cart.clear(user_id).await.expect("first clear");
    assert!(cart.list_lines(user_id).await.expect("list lines").is_empty());

    cart.clear(user_id).await.expect("clearing an empty cart");
}
