//! Domain and row types for the ordering API.

pub mod cart;
pub mod order;
pub mod product;
pub mod session;
pub mod user;

pub use cart::{CartLine, CartLineDetail};
pub use order::{Order, OrderDetail};
pub use product::Product;
pub use session::{CurrentOwner, CurrentUser, keys as session_keys};
pub use user::{Owner, User};
