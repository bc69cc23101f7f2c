//! Authentication handlers
//!
//! One file per endpoint, plus the shared request/response types.

/// Registration handler (POST /usuario/registro)
pub mod registro;

/// Login handler (POST /usuario/login)
pub mod login;

/// Shared request/response types
pub mod types;

pub use login::login;
pub use registro::registro;
