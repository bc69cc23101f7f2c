/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /usuario/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password using bcrypt
 * 3. Generate a JWT token
 *
 * # Security Notes
 *
 * - Unknown email and wrong password return the same 400 response to
 *   prevent user enumeration
 * - Password verification uses constant-time comparison (via bcrypt)
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, Json};
use bcrypt::verify;

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::get_usuario_by_correo;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the email and password and returns a JWT token on success.
///
/// # Errors
///
/// * `400 Bad Request` - unknown email or wrong password
/// * `500 Internal Server Error` - database or token generation failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    tracing::info!("Login request for correo: {}", request.correo);

    let usuario = get_usuario_by_correo(&state.pool, &request.correo)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Usuario not found: {}", request.correo);
            ApiError::validation("Correo o contraseña incorrectos")
        })?;

    // Verify password
    let valid = verify(&request.contrasena, &usuario.contrasena).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::internal(format!("password verification failed: {e}"))
    })?;

    if !valid {
        tracing::warn!("Invalid password for usuario: {}", request.correo);
        return Err(ApiError::validation("Correo o contraseña incorrectos"));
    }

    let token = create_token(&state.config.jwt_secret, usuario.id, usuario.correo.clone())
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            ApiError::internal(format!("token generation failed: {e}"))
        })?;

    tracing::info!("Usuario logged in: {} ({})", usuario.nombre, usuario.correo);

    Ok(Json(LoginResponse {
        message: "Inicio de sesión exitoso".to_string(),
        token,
    }))
}
