//! HTTP middleware stack for the ordering API.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. CORS (the API is consumed by a separate frontend)
//! 4. Session layer (tower-sessions with `PostgreSQL` store)

pub mod auth;
pub mod session;

pub use auth::{RequireOwner, clear_session, set_current_owner, set_current_user};
pub use session::create_session_layer;
