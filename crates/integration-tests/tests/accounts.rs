//! Integration tests for registration and login.

use sqlx::PgPool;

use bodega_server::services::auth::{AuthError, AuthService};

#[sqlx::test(migrations = "../server/migrations")]
async fn test_duplicate_email_rejected_without_touching_first_account(pool: PgPool) {
    let auth = AuthService::new(&pool);
    auth.register_user("First", "dup@example.com", "password123", None)
        .await
        .expect("first registration");

    let second = auth
        .register_user("Second", "dup@example.com", "different456", Some("555-0100"))
        .await;
    assert!(matches!(second, Err(AuthError::DuplicateEmail)));

    let user = auth
        .login_user("dup@example.com", "password123")
        .await
        .expect("original credentials still work");
    assert_eq!(user.name, "First");
}

#[sqlx::test(migrations = "../server/migrations")]
async fn test_login_with_wrong_password_is_invalid_credentials(pool: PgPool) {
    let auth = AuthService::new(&pool);
    auth.register_user("Shopper", "shopper@example.com", "password123", None)
        .await
        .expect("register");

    let result = auth
        .login_user("shopper@example.com", "not-the-password")
        .await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}
