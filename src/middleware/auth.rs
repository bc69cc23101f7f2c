/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and attaches the user identity to the request.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::auth::users::get_usuario_by_id;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from the JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub correo: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT from the `Authorization: Bearer <token>` header
/// 2. Verifies the token signature and expiry
/// 3. Checks the token's user still exists
/// 4. Attaches the user identity to request extensions
///
/// Returns 401 Unauthorized when the token is missing or invalid.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthorized("Se requiere un token de autenticación")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::unauthorized("Formato de autorización inválido")
    })?;

    let claims = verify_token(&state.config.jwt_secret, token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::unauthorized("Token inválido o expirado")
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::error!("Invalid user id in token: {:?}", e);
        ApiError::unauthorized("Token inválido o expirado")
    })?;

    // The token may outlive the account
    if get_usuario_by_id(&state.pool, user_id).await?.is_none() {
        tracing::warn!("Token for unknown user {}", user_id);
        return Err(ApiError::unauthorized("Token inválido o expirado"));
    }

    tracing::debug!("Authenticated {} ({})", claims.correo, user_id);

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        correo: claims.correo,
    });

    Ok(next.run(request).await)
}
