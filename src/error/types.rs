/**
 * API Error Types
 *
 * This module defines the error type used by every HTTP handler.
 *
 * # Error Categories
 *
 * Expected domain failures carry the full client-facing message:
 *
 * - `Validation` - bad input or a referenced entity that must exist (400)
 * - `Unauthorized` - missing or invalid bearer token (401)
 * - `NotFound` - lookups that matched nothing (404)
 * - `Conflict` - uniqueness violations, e.g. a duplicated correo or a
 *   colliding remision identificador (409)
 *
 * Unexpected upstream/internal failures map to 500 and expose the raw
 * underlying message in the response `error` field:
 *
 * - `Database` - any sqlx error that is not a unique violation
 * - `Document` - PDF rendering failures
 * - `Email` - SMTP transport failures
 * - `Internal` - anything else
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Error type returned by all handlers.
///
/// Each variant maps to an HTTP status code and a JSON body with a
/// `message` field (and, for 5xx, an `error` field with the underlying
/// message string).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid input or a missing referenced entity (400)
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid bearer token (401)
    #[error("{0}")]
    Unauthorized(String),

    /// The requested resource does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint was violated (409)
    #[error("{0}")]
    Conflict(String),

    /// Data-store failure (500)
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// PDF rendering failure (500)
    #[error("document rendering failed: {0}")]
    Document(String),

    /// Email delivery failure (500)
    #[error("email delivery failed: {0}")]
    Email(String),

    /// Any other unexpected failure (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an unauthorized error (401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create a not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a conflict error (409)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create a document rendering error (500)
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document(message.into())
    }

    /// Create an email delivery error (500)
    pub fn email(message: impl Into<String>) -> Self {
        Self::Email(message.into())
    }

    /// Create an internal error (500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Document(_) | Self::Email(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The client-facing `message` field
    pub fn message(&self) -> String {
        match self {
            Self::Validation(m) | Self::Unauthorized(m) | Self::NotFound(m) | Self::Conflict(m) => {
                m.clone()
            }
            Self::Database(_) => "Error en la base de datos".to_string(),
            Self::Document(_) => "Error al generar el documento".to_string(),
            Self::Email(_) => "Error al enviar el correo".to_string(),
            Self::Internal(_) => "Error interno del servidor".to_string(),
        }
    }

    /// The underlying message for the `error` field, present only for
    /// unexpected (5xx) failures
    pub fn error_detail(&self) -> Option<String> {
        match self {
            Self::Validation(_) | Self::Unauthorized(_) | Self::NotFound(_) | Self::Conflict(_) => {
                None
            }
            Self::Database(e) => Some(e.to_string()),
            Self::Document(m) | Self::Email(m) | Self::Internal(m) => Some(m.clone()),
        }
    }
}

/// Map sqlx errors into API errors.
///
/// Unique violations become `Conflict` so that a duplicated correo or a
/// colliding identificador surfaces as 409 instead of a bare 500.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return Self::Conflict(db.message().to_string());
            }
        }
        Self::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("no token").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("dup").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::document("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::email("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_expected_errors_carry_their_message() {
        let err = ApiError::not_found("Cliente no encontrado");
        assert_eq!(err.message(), "Cliente no encontrado");
        assert!(err.error_detail().is_none());
    }

    #[test]
    fn test_unexpected_errors_expose_detail() {
        let err = ApiError::email("connection refused");
        assert_eq!(err.message(), "Error al enviar el correo");
        assert_eq!(err.error_detail().as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_from_sqlx_error() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        match err {
            ApiError::Database(_) => {}
            other => panic!("expected Database, got {other:?}"),
        }
    }
}
