//! Database operations for articles.

use sqlx::PgPool;

use crate::articulos::model::{Articulo, ArticuloPayload};

/// Insert a new article row.
pub async fn create_articulo(
    pool: &PgPool,
    payload: &ArticuloPayload,
) -> Result<Articulo, sqlx::Error> {
    sqlx::query_as::<_, Articulo>(
        r#"
        INSERT INTO articulos (codigo, nombre, descripcion, precio)
        VALUES ($1, $2, $3, $4)
        RETURNING id, codigo, nombre, descripcion, precio
        "#,
    )
    .bind(&payload.codigo)
    .bind(&payload.nombre)
    .bind(&payload.descripcion)
    .bind(payload.precio)
    .fetch_one(pool)
    .await
}

/// List all articles.
pub async fn list_articulos(pool: &PgPool) -> Result<Vec<Articulo>, sqlx::Error> {
    sqlx::query_as::<_, Articulo>(
        r#"
        SELECT id, codigo, nombre, descripcion, precio
        FROM articulos
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}
