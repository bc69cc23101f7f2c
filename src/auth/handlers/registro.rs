/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /usuario/registro.
 *
 * # Registration Process
 *
 * 1. Validate name, email format and password length
 * 2. Check if a user with this email already exists
 * 3. Hash the password using bcrypt
 * 4. Insert the user row
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt and DEFAULT_COST
 * - Passwords are never returned in responses
 */

use axum::{extract::State, http::StatusCode, Json};
use bcrypt::{hash, DEFAULT_COST};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::auth::handlers::types::RegistroRequest;
use crate::auth::users::{create_usuario, get_usuario_by_correo};
use crate::error::ApiError;

/// Validate a registration request.
///
/// The email must contain `@` (basic check), the password must be at
/// least 8 characters and the name must not be blank.
fn validar_registro(request: &RegistroRequest) -> Result<(), ApiError> {
    if request.nombre.trim().is_empty() {
        return Err(ApiError::validation("El nombre es obligatorio"));
    }
    if !request.correo.contains('@') {
        return Err(ApiError::validation("El formato del correo es inválido"));
    }
    if request.contrasena.len() < 8 {
        return Err(ApiError::validation(
            "La contraseña debe tener al menos 8 caracteres",
        ));
    }
    Ok(())
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid name, email or password
/// * `409 Conflict` - a user with this email already exists
/// * `500 Internal Server Error` - hashing or database failure
pub async fn registro(
    State(pool): State<PgPool>,
    Json(request): Json<RegistroRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    tracing::info!("Registro request for correo: {}", request.correo);

    if let Err(e) = validar_registro(&request) {
        tracing::warn!("Registro validation failed: {}", e);
        return Err(e);
    }

    // Check if the email is already taken
    if get_usuario_by_correo(&pool, &request.correo).await?.is_some() {
        tracing::warn!("Correo already registered: {}", request.correo);
        return Err(ApiError::conflict("El correo ya está registrado"));
    }

    // Hash password
    let contrasena_hash = hash(&request.contrasena, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal(format!("password hashing failed: {e}"))
    })?;

    let usuario = create_usuario(&pool, request.nombre, request.correo, contrasena_hash).await?;

    tracing::info!("Usuario created: {} ({})", usuario.nombre, usuario.correo);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Usuario creado exitosamente" })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(nombre: &str, correo: &str, contrasena: &str) -> RegistroRequest {
        RegistroRequest {
            nombre: nombre.to_string(),
            correo: correo.to_string(),
            contrasena: contrasena.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        let result = validar_registro(&request("Ana", "ana@example.com", "password123"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_blank_nombre() {
        let result = validar_registro(&request("   ", "ana@example.com", "password123"));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_correo() {
        let result = validar_registro(&request("Ana", "not-an-email", "password123"));
        assert!(result.is_err());
    }

    #[test]
    fn test_short_contrasena() {
        let result = validar_registro(&request("Ana", "ana@example.com", "corta"));
        assert!(result.is_err());
    }
}
