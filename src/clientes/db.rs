//! Database operations for clients.

use sqlx::PgPool;

use crate::clientes::model::{Cliente, ClientePayload};

/// Insert a new client row.
pub async fn create_cliente(pool: &PgPool, payload: &ClientePayload) -> Result<Cliente, sqlx::Error> {
    sqlx::query_as::<_, Cliente>(
        r#"
        INSERT INTO clientes (nombre, domicilio, rfc, telefono, email)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, nombre, domicilio, rfc, telefono, email
        "#,
    )
    .bind(&payload.nombre)
    .bind(&payload.domicilio)
    .bind(&payload.rfc)
    .bind(&payload.telefono)
    .bind(&payload.email)
    .fetch_one(pool)
    .await
}

/// List all clients.
pub async fn list_clientes(pool: &PgPool) -> Result<Vec<Cliente>, sqlx::Error> {
    sqlx::query_as::<_, Cliente>(
        r#"
        SELECT id, nombre, domicilio, rfc, telefono, email
        FROM clientes
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Case-insensitive partial search over nombre, rfc and email.
pub async fn search_clientes(pool: &PgPool, term: &str) -> Result<Vec<Cliente>, sqlx::Error> {
    let pattern = format!("%{term}%");

    sqlx::query_as::<_, Cliente>(
        r#"
        SELECT id, nombre, domicilio, rfc, telefono, email
        FROM clientes
        WHERE nombre ILIKE $1 OR rfc ILIKE $1 OR email ILIKE $1
        ORDER BY id
        "#,
    )
    .bind(&pattern)
    .fetch_all(pool)
    .await
}

/// Fetch a client by id.
pub async fn get_cliente(pool: &PgPool, id: i64) -> Result<Option<Cliente>, sqlx::Error> {
    sqlx::query_as::<_, Cliente>(
        r#"
        SELECT id, nombre, domicilio, rfc, telefono, email
        FROM clientes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Update a client by id. Returns false when no row matched.
pub async fn update_cliente(
    pool: &PgPool,
    id: i64,
    payload: &ClientePayload,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE clientes
        SET nombre = $1, domicilio = $2, rfc = $3, telefono = $4, email = $5
        WHERE id = $6
        "#,
    )
    .bind(&payload.nombre)
    .bind(&payload.domicilio)
    .bind(&payload.rfc)
    .bind(&payload.telefono)
    .bind(&payload.email)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a client by id. Returns false when no row matched.
pub async fn delete_cliente(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
