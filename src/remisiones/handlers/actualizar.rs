/**
 * Remisión Update Handler
 *
 * Implements PUT /remision/actualizar-remision/{identificador}. The
 * identifier is matched exactly; the client reference is updated and
 * the line-item set fully replaced in one transaction.
 */

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::remisiones::db;
use crate::remisiones::handlers::types::ActualizarRemisionRequest;

/// Update a remisión
///
/// # Errors
///
/// * `400 Bad Request` - the replacement client does not exist
/// * `404 Not Found` - no remisión with this identifier
/// * `500 Internal Server Error` - database failure
pub async fn actualizar_remision(
    State(pool): State<PgPool>,
    Path(identificador): Path<String>,
    Json(request): Json<ActualizarRemisionRequest>,
) -> Result<Json<Value>, ApiError> {
    let remision = db::get_remision_by_identificador(&pool, &identificador)
        .await?
        .ok_or_else(|| ApiError::not_found("No se encontró la remisión especificada."))?;

    let updated =
        db::update_remision(&pool, remision.id, request.cliente_id, &request.articulos).await?;
    if !updated {
        return Err(ApiError::validation("El cliente especificado no existe"));
    }

    tracing::info!(
        "Remisión {} updated: cliente {}, {} line items",
        identificador,
        request.cliente_id,
        request.articulos.len()
    );

    Ok(Json(json!({
        "message": "Remisión actualizada con éxito",
        "identificador": identificador,
    })))
}
