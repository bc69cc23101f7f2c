//! Authentication and user management
//!
//! Registration and login endpoints, the `usuarios` table operations,
//! and JWT session tokens. Route protection lives in
//! [`crate::middleware::auth`].

/// HTTP handlers (registro, login)
pub mod handlers;

/// JWT token creation and verification
pub mod sessions;

/// User model and database operations
pub mod users;

pub use handlers::{login, registro};
