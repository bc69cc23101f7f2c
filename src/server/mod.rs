//! Server configuration, state and initialization.

/// Environment-driven configuration
pub mod config;

/// Application setup (pool, migrations, mailer, router)
pub mod init;

/// Shared application state
pub mod state;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
