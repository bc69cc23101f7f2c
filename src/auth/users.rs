/**
 * User Model and Database Operations
 *
 * This module handles user rows and their database operations.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User row from the `usuarios` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Usuario {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub nombre: String,
    /// Email address (unique)
    pub correo: String,
    /// Hashed password (bcrypt)
    pub contrasena: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `nombre` - Display name
/// * `correo` - Email address
/// * `contrasena_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_usuario(
    pool: &PgPool,
    nombre: String,
    correo: String,
    contrasena_hash: String,
) -> Result<Usuario, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let usuario = sqlx::query_as::<_, Usuario>(
        r#"
        INSERT INTO usuarios (id, nombre, correo, contrasena, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, nombre, correo, contrasena, created_at
        "#,
    )
    .bind(id)
    .bind(&nombre)
    .bind(&correo)
    .bind(&contrasena_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(usuario)
}

/// Get a user by email
///
/// # Returns
/// User or None if not found
pub async fn get_usuario_by_correo(
    pool: &PgPool,
    correo: &str,
) -> Result<Option<Usuario>, sqlx::Error> {
    let usuario = sqlx::query_as::<_, Usuario>(
        r#"
        SELECT id, nombre, correo, contrasena, created_at
        FROM usuarios
        WHERE correo = $1
        "#,
    )
    .bind(correo)
    .fetch_optional(pool)
    .await?;

    Ok(usuario)
}

/// Get a user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_usuario_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Usuario>, sqlx::Error> {
    let usuario = sqlx::query_as::<_, Usuario>(
        r#"
        SELECT id, nombre, correo, contrasena, created_at
        FROM usuarios
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(usuario)
}
