/**
 * Authentication Handler Types
 *
 * Request and response types used by the registro and login handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request
///
/// Contains the name, email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegistroRequest {
    /// Display name
    pub nombre: String,
    /// Email address
    pub correo: String,
    /// Password (will be hashed before storage)
    pub contrasena: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address
    pub correo: String,
    /// Password (verified against the stored bcrypt hash)
    pub contrasena: String,
}

/// Login response with the session token
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    /// Human-readable status message
    pub message: String,
    /// JWT token for authentication (30-day expiration)
    pub token: String,
}
