/**
 * Remisión Delete Handler
 *
 * Implements DELETE /remision/borrar-remision/{identificador}. The
 * identifier is matched exactly; line items and header are removed in
 * one transaction.
 */

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::remisiones::db;

/// Delete a remisión
///
/// # Errors
///
/// * `404 Not Found` - no remisión with this identifier
/// * `500 Internal Server Error` - database failure
pub async fn borrar_remision(
    State(pool): State<PgPool>,
    Path(identificador): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let remision = db::get_remision_by_identificador(&pool, &identificador)
        .await?
        .ok_or_else(|| ApiError::not_found("No se encontró la remisión especificada."))?;

    db::delete_remision(&pool, remision.id).await?;

    tracing::info!("Remisión {} deleted", identificador);

    Ok(Json(json!({ "message": "Remisión eliminada con éxito" })))
}
