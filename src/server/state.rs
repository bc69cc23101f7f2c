/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The PostgreSQL connection pool (required)
 * - The SMTP mailer (optional; `None` disables email delivery)
 * - The loaded server configuration
 *
 * All of it is immutable after startup; cloning the state clones
 * handles, not connections.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers that only touch the
 * database take `State<PgPool>` directly instead of the whole
 * `AppState`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::notifier::Mailer;
use crate::server::config::ServerConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// SMTP mailer; `None` when SMTP is not configured
    pub mailer: Option<Mailer>,
    /// Configuration loaded at startup
    pub config: ServerConfig,
}

/// Allow handlers to extract the pool directly with `State<PgPool>`.
impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
