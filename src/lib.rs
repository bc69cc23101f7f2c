//! Remisiones Backend - Main Library
//!
//! Backend service for a business-document workflow: users register
//! and log in, maintain a catalog of clients and articles, and issue
//! "remisiones" (delivery slips) that reference a client and a set of
//! articles. Creating a remisión renders a PDF of the document and
//! emails it to the client.
//!
//! # Module Structure
//!
//! - **`auth`** - registration, login and JWT session tokens
//! - **`clientes`** - client catalog (CRUD plus search)
//! - **`articulos`** - article catalog
//! - **`remisiones`** - the delivery-slip workflow: identifier
//!   generation, transactional persistence, search, update, delete
//! - **`pdf`** - fixed-template PDF rendering of a remisión
//! - **`notifier`** - SMTP dispatch of rendered documents
//! - **`middleware`** - bearer-token route protection
//! - **`routes`** - route tables and CORS
//! - **`server`** - configuration, shared state and initialization
//! - **`error`** - the `ApiError` type every handler returns
//!
//! # Usage
//!
//! ```rust,no_run
//! use remisiones_backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`; the error type maps expected
//! domain failures to 4xx responses with a descriptive `message` and
//! unexpected failures to 500 responses that also carry the underlying
//! message in an `error` field.

/// Article catalog
pub mod articulos;

/// Authentication and user management
pub mod auth;

/// Client catalog
pub mod clientes;

/// API error type and response conversion
pub mod error;

/// HTTP middleware
pub mod middleware;

/// SMTP notifier
pub mod notifier;

/// PDF document rendering
pub mod pdf;

/// Remisión workflow
pub mod remisiones;

/// Route configuration
pub mod routes;

/// Server configuration, state and initialization
pub mod server;
