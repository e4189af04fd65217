//! Business services built on top of the repositories.

pub mod auth;
pub mod checkout;

pub use auth::{AuthError, AuthService};
pub use checkout::{CheckoutEngine, CheckoutError, CheckoutSummary};
