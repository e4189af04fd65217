//! Order status enum.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Fulfillment status of an order.
///
/// Orders are created `Pending` at checkout and toggled by the owner. Both
/// transitions are allowed freely; neither state is terminal. The
/// `fulfilled_at` timestamp on an order is non-null exactly when the status
/// is `Fulfilled`.
///
/// Stored in Postgres as text (`'Pending'` / `'Fulfilled'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Fulfilled,
}

impl OrderStatus {
    /// The database/wire representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Fulfilled => "Fulfilled",
        }
    }

    /// Parse a status from its database representation.
    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Fulfilled" => Some(Self::Fulfilled),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for OrderStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for OrderStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Self::from_str_opt(&s).ok_or_else(|| format!("unknown order status: {s}").into())
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for OrderStatus {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_roundtrip() {
        for status in [OrderStatus::Pending, OrderStatus::Fulfilled] {
            assert_eq!(OrderStatus::from_str_opt(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(OrderStatus::from_str_opt("Shipped"), None);
        assert_eq!(OrderStatus::from_str_opt(""), None);
        assert_eq!(OrderStatus::from_str_opt("pending"), None);
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&OrderStatus::Fulfilled).expect("serialize");
        assert_eq!(json, "\"Fulfilled\"");

        let back: OrderStatus = serde_json::from_str("\"Pending\"").expect("deserialize");
        assert_eq!(back, OrderStatus::Pending);

        assert!(serde_json::from_str::<OrderStatus>("\"Cancelled\"").is_err());
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
