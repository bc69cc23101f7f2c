/**
 * Server Configuration
 *
 * This module loads all environment-driven configuration into one
 * explicit `ServerConfig` value at startup, so handlers receive their
 * dependencies through state instead of reading process globals.
 *
 * # Configuration Sources
 *
 * Everything comes from environment variables (a `.env` file is loaded
 * by `main` before this runs):
 *
 * - `DATABASE_URL` - Postgres connection string (required)
 * - `JWT_SECRET` - token signing secret (falls back to a dev default
 *   with a warning)
 * - `PORT` - listening port (default 3001)
 * - `FRONTEND_ORIGIN` - allowed CORS origin (optional)
 * - `SMTP_HOST`, `SMTP_USERNAME`, `SMTP_PASSWORD`, `SMTP_FROM` - email
 *   delivery; all four must be present to enable the notifier
 *
 * # Error Handling
 *
 * Only a missing `DATABASE_URL` aborts startup. Partial SMTP
 * configuration is logged and the notifier is disabled; the server
 * keeps running without email delivery.
 */

use thiserror::Error;

/// Default listening port.
const DEFAULT_PORT: u16 = 3001;

/// Fallback signing secret for local development only.
const DEV_JWT_SECRET: &str = "remisiones-dev-secret-change-in-production";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// SMTP relay settings for the notifier.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub host: String,
    /// Relay credential username
    pub username: String,
    /// Relay credential password
    pub password: String,
    /// Sender mailbox, e.g. `Remisiones <remisiones@empresa.mx>`
    pub from: String,
}

/// All server configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Postgres connection string
    pub database_url: String,
    /// Secret for signing and verifying JWTs
    pub jwt_secret: String,
    /// Listening port
    pub port: u16,
    /// Frontend origin allowed by CORS, if any
    pub frontend_origin: Option<String>,
    /// SMTP settings; `None` disables email delivery
    pub smtp: Option<SmtpConfig>,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingValue` if `DATABASE_URL` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingValue("DATABASE_URL"))?;

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            DEV_JWT_SECRET.to_string()
        });

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let frontend_origin = std::env::var("FRONTEND_ORIGIN").ok();

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            frontend_origin,
            smtp: load_smtp_config(),
        })
    }
}

/// Read SMTP settings, requiring all four variables.
///
/// A partially configured relay is treated as disabled so a typo in one
/// variable cannot leave the server half-configured.
fn load_smtp_config() -> Option<SmtpConfig> {
    let host = std::env::var("SMTP_HOST").ok();
    let username = std::env::var("SMTP_USERNAME").ok();
    let password = std::env::var("SMTP_PASSWORD").ok();
    let from = std::env::var("SMTP_FROM").ok();

    match (host, username, password, from) {
        (Some(host), Some(username), Some(password), Some(from)) => Some(SmtpConfig {
            host,
            username,
            password,
            from,
        }),
        (None, None, None, None) => {
            tracing::warn!("SMTP not configured, email delivery disabled");
            None
        }
        _ => {
            tracing::warn!(
                "Incomplete SMTP configuration (need SMTP_HOST, SMTP_USERNAME, \
                 SMTP_PASSWORD and SMTP_FROM), email delivery disabled"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "DATABASE_URL",
            "JWT_SECRET",
            "PORT",
            "FRONTEND_ORIGIN",
            "SMTP_HOST",
            "SMTP_USERNAME",
            "SMTP_PASSWORD",
            "SMTP_FROM",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_missing_database_url() {
        clear_env();
        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingValue("DATABASE_URL"))));
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/remisiones");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.jwt_secret, DEV_JWT_SECRET);
        assert!(config.frontend_origin.is_none());
        assert!(config.smtp.is_none());
    }

    #[test]
    #[serial]
    fn test_full_config() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/remisiones");
        std::env::set_var("JWT_SECRET", "topsecret");
        std::env::set_var("PORT", "8080");
        std::env::set_var("FRONTEND_ORIGIN", "https://remisiones.example.mx");
        std::env::set_var("SMTP_HOST", "smtp.example.mx");
        std::env::set_var("SMTP_USERNAME", "postmaster");
        std::env::set_var("SMTP_PASSWORD", "hunter2");
        std::env::set_var("SMTP_FROM", "Remisiones <remisiones@example.mx>");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.jwt_secret, "topsecret");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.frontend_origin.as_deref(),
            Some("https://remisiones.example.mx")
        );
        let smtp = config.smtp.expect("smtp should be configured");
        assert_eq!(smtp.host, "smtp.example.mx");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_partial_smtp_is_disabled() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/remisiones");
        std::env::set_var("SMTP_HOST", "smtp.example.mx");

        let config = ServerConfig::from_env().unwrap();
        assert!(config.smtp.is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_falls_back() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/remisiones");
        std::env::set_var("PORT", "not-a-port");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        clear_env();
    }
}
