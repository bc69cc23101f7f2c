/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: database pool creation, migrations, the optional mailer and
 * route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect the PostgreSQL pool (required; failure aborts startup)
 * 2. Run migrations; failures are logged and startup continues, since
 *    the schema may already be in place
 * 3. Build the SMTP mailer when configured
 * 4. Assemble the state and create the router
 */

use axum::Router;
use sqlx::PgPool;

use crate::notifier::Mailer;
use crate::routes::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Configuration loaded from the environment
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Returns the connection error when the database pool cannot be
/// created. Everything else degrades gracefully: migration failures
/// and a broken SMTP setup are logged and the server runs without
/// them.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing remisiones backend server");

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // The schema may already exist
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    let mailer = match &config.smtp {
        Some(smtp) => match Mailer::from_config(smtp) {
            Ok(mailer) => {
                tracing::info!("SMTP relay configured: {}", smtp.host);
                Some(mailer)
            }
            Err(e) => {
                tracing::error!("Failed to configure SMTP relay: {}", e);
                tracing::warn!("Continuing without email delivery");
                None
            }
        },
        None => None,
    };

    let state = AppState {
        pool,
        mailer,
        config,
    };

    Ok(create_router(state))
}
