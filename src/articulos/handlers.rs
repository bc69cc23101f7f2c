/**
 * Article Handlers
 *
 * HTTP handlers for the article catalog. The catalog is read-mostly:
 * articles are added once and then referenced from remisiones.
 *
 * # Endpoints
 *
 * - `POST /articulo/agregar` - add an article
 * - `GET /articulo/articulos` - list all articles
 */

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::articulos::db;
use crate::articulos::model::{ArticuloPayload, ArticulosResponse};
use crate::error::ApiError;

/// Add an article
///
/// # Errors
///
/// * `400 Bad Request` - missing code or name
/// * `500 Internal Server Error` - database failure
pub async fn agregar_articulo(
    State(pool): State<PgPool>,
    Json(payload): Json<ArticuloPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    tracing::info!("Adding articulo: {} ({})", payload.nombre, payload.codigo);

    if payload.codigo.trim().is_empty() || payload.nombre.trim().is_empty() {
        return Err(ApiError::validation(
            "El código y el nombre del artículo son obligatorios",
        ));
    }

    let articulo = db::create_articulo(&pool, &payload).await?;
    tracing::info!("Articulo created with id {}", articulo.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Artículo agregado exitosamente" })),
    ))
}

/// List all articles
pub async fn listar_articulos(
    State(pool): State<PgPool>,
) -> Result<Json<ArticulosResponse>, ApiError> {
    let articulos = db::list_articulos(&pool).await?;
    tracing::info!("Listed {} articulos", articulos.len());

    Ok(Json(ArticulosResponse {
        message: "Artículos obtenidos exitosamente".to_string(),
        articulos,
    }))
}
