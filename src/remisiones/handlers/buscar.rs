/**
 * Remisión Search Handler
 *
 * Implements GET /remision/buscar?identificador= with a partial,
 * case-insensitive match. Each matched header is returned with its
 * client summary and full line-item set; the line items of all matches
 * are fetched concurrently.
 */

use axum::{
    extract::{Query, State},
    Json,
};
use futures_util::future::try_join_all;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::remisiones::db;
use crate::remisiones::handlers::types::{BusquedaRemisiones, BusquedaRemisionesResponse};
use crate::remisiones::model::RemisionConDetalles;

/// Search remisiones by partial identifier
///
/// # Errors
///
/// * `400 Bad Request` - missing or empty `identificador` parameter
/// * `404 Not Found` - no remisión matched
/// * `500 Internal Server Error` - database failure
pub async fn buscar_remisiones(
    State(pool): State<PgPool>,
    Query(params): Query<BusquedaRemisiones>,
) -> Result<Json<BusquedaRemisionesResponse>, ApiError> {
    let term = params.identificador.as_deref().unwrap_or_default();
    if term.is_empty() {
        return Err(ApiError::validation(
            "Se requiere el parámetro identificador para la búsqueda.",
        ));
    }

    tracing::info!("Searching remisiones for: {}", term);

    let headers = db::search_remisiones(&pool, term).await?;
    if headers.is_empty() {
        return Err(ApiError::not_found(
            "No se encontraron remisiones con el identificador especificado.",
        ));
    }

    let remisiones = try_join_all(headers.into_iter().map(|remision| {
        let pool = pool.clone();
        async move {
            let detalles = db::get_detalles_remision(&pool, remision.id).await?;
            Ok::<_, sqlx::Error>(RemisionConDetalles { remision, detalles })
        }
    }))
    .await?;

    Ok(Json(BusquedaRemisionesResponse {
        message: "Remisiones obtenidas exitosamente".to_string(),
        remisiones,
    }))
}
