//! Database operations for remisiones
//!
//! Multi-step writes (header plus line items) run inside a single
//! transaction so a failure cannot leave a header without its items.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::remisiones::model::{
    ArticuloRemision, DetalleConArticulo, Remision, RemisionConCliente,
};

/// Insert a remisión header and its line items in one transaction.
pub async fn create_remision(
    pool: &PgPool,
    fecha: NaiveDate,
    cliente_id: i64,
    identificador: &str,
    articulos: &[ArticuloRemision],
) -> Result<Remision, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let remision = sqlx::query_as::<_, Remision>(
        r#"
        INSERT INTO remisiones (fecha, cliente_id, identificador)
        VALUES ($1, $2, $3)
        RETURNING id, fecha, cliente_id, identificador
        "#,
    )
    .bind(fecha)
    .bind(cliente_id)
    .bind(identificador)
    .fetch_one(&mut *tx)
    .await?;

    for articulo in articulos {
        sqlx::query(
            r#"
            INSERT INTO detalles_remision (remision_id, articulo_id, cantidad)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(remision.id)
        .bind(articulo.articulo_id)
        .bind(articulo.cantidad)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(remision)
}

/// Fetch a remisión header by its exact identificador.
pub async fn get_remision_by_identificador(
    pool: &PgPool,
    identificador: &str,
) -> Result<Option<Remision>, sqlx::Error> {
    sqlx::query_as::<_, Remision>(
        r#"
        SELECT id, fecha, cliente_id, identificador
        FROM remisiones
        WHERE identificador = $1
        "#,
    )
    .bind(identificador)
    .fetch_optional(pool)
    .await
}

/// Case-insensitive partial search over identificador, joined with the
/// client summary fields.
pub async fn search_remisiones(
    pool: &PgPool,
    term: &str,
) -> Result<Vec<RemisionConCliente>, sqlx::Error> {
    let pattern = format!("%{term}%");

    sqlx::query_as::<_, RemisionConCliente>(
        r#"
        SELECT r.id, r.fecha, r.cliente_id, r.identificador,
               c.nombre AS cliente_nombre, c.rfc AS cliente_rfc
        FROM remisiones r
        LEFT JOIN clientes c ON c.id = r.cliente_id
        WHERE r.identificador ILIKE $1
        ORDER BY r.id
        "#,
    )
    .bind(&pattern)
    .fetch_all(pool)
    .await
}

/// Fetch the line items of a remisión joined with article description
/// and unit price.
pub async fn get_detalles_remision(
    pool: &PgPool,
    remision_id: i64,
) -> Result<Vec<DetalleConArticulo>, sqlx::Error> {
    sqlx::query_as::<_, DetalleConArticulo>(
        r#"
        SELECT d.articulo_id, a.descripcion, a.precio, d.cantidad
        FROM detalles_remision d
        LEFT JOIN articulos a ON a.id = d.articulo_id
        WHERE d.remision_id = $1
        ORDER BY d.id
        "#,
    )
    .bind(remision_id)
    .fetch_all(pool)
    .await
}

/// Update the client reference of a remisión and replace its full
/// line-item set, in one transaction.
///
/// The replacement client is verified inside the same transaction;
/// returns `false` without changing anything when it does not exist.
pub async fn update_remision(
    pool: &PgPool,
    remision_id: i64,
    cliente_id: i64,
    articulos: &[ArticuloRemision],
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let cliente: Option<i64> = sqlx::query_scalar("SELECT id FROM clientes WHERE id = $1")
        .bind(cliente_id)
        .fetch_optional(&mut *tx)
        .await?;
    if cliente.is_none() {
        return Ok(false);
    }

    sqlx::query("UPDATE remisiones SET cliente_id = $1 WHERE id = $2")
        .bind(cliente_id)
        .bind(remision_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM detalles_remision WHERE remision_id = $1")
        .bind(remision_id)
        .execute(&mut *tx)
        .await?;

    for articulo in articulos {
        sqlx::query(
            r#"
            INSERT INTO detalles_remision (remision_id, articulo_id, cantidad)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(remision_id)
        .bind(articulo.articulo_id)
        .bind(articulo.cantidad)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(true)
}

/// Delete a remisión and its line items in one transaction.
pub async fn delete_remision(pool: &PgPool, remision_id: i64) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM detalles_remision WHERE remision_id = $1")
        .bind(remision_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM remisiones WHERE id = $1")
        .bind(remision_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}
