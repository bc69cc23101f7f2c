/**
 * Error Conversion
 *
 * This module converts API errors into HTTP responses so handlers can
 * return them directly with `?`.
 *
 * # Response Format
 *
 * Expected failures (400/401/404/409):
 * ```json
 * { "message": "Cliente no encontrado" }
 * ```
 *
 * Unexpected failures (500) additionally expose the underlying message
 * string in an `error` field:
 * ```json
 * { "message": "Error en la base de datos", "error": "..." }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = match self.error_detail() {
            Some(detail) => json!({ "message": message, "error": detail }),
            None => json!({ "message": message }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_response() {
        let response = ApiError::not_found("No se encontraron remisiones").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_response() {
        let response = ApiError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
