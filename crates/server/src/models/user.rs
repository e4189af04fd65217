//! Account domain types.
//!
//! Customers and owners live in separate tables and are represented by
//! separate types so their IDs cannot be mixed up. Password hashes are never
//! part of these types; the repositories return them separately to the auth
//! service only.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use bodega_core::{Email, OwnerId, UserId};

/// A customer account.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address (unique).
    pub email: Email,
    /// Optional phone number.
    pub phone: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// A shop owner account.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Owner {
    /// Unique owner ID.
    pub id: OwnerId,
    /// Display name.
    pub name: String,
    /// Email address (unique).
    pub email: Email,
    /// Optional phone number.
    pub phone: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
