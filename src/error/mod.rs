//! API Error Module
//!
//! Defines the error type shared by every handler and its conversion
//! into HTTP responses.
//!
//! - **`types`** - the `ApiError` categories and status mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! The categories follow a two-tier contract: expected domain failures
//! (validation, not found, conflict) map to 4xx with a descriptive
//! `message`; unexpected failures (database, document, email, internal)
//! map to 500 and carry the raw underlying message in an `error` field.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
