/**
 * Remisión Creation Handler
 *
 * Implements the full creation workflow for POST /remision/crear-remision:
 *
 * 1. Verify the referenced client exists
 * 2. Generate the identifier and take the current date
 * 3. Insert the header and line items in one transaction
 * 4. Fetch the line items joined with article data
 * 5. Render the PDF document
 * 6. Email the document to the client
 *
 * Rendering and dispatch run after the transaction has committed: a
 * failure there is reported to the caller, but the stored remisión
 * stays. When no mailer is configured or the client has no email
 * address, dispatch is skipped with a warning.
 */

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::clientes::db as clientes_db;
use crate::error::ApiError;
use crate::pdf;
use crate::remisiones::db;
use crate::remisiones::handlers::types::{CrearRemisionRequest, CrearRemisionResponse};
use crate::remisiones::identifier::generar_identificador;
use crate::server::state::AppState;

/// Create a remisión
///
/// # Errors
///
/// * `400 Bad Request` - the referenced client does not exist
/// * `409 Conflict` - the generated identifier collided
/// * `500 Internal Server Error` - database, rendering or email failure
pub async fn crear_remision(
    State(state): State<AppState>,
    Json(request): Json<CrearRemisionRequest>,
) -> Result<(StatusCode, Json<CrearRemisionResponse>), ApiError> {
    let cliente = clientes_db::get_cliente(&state.pool, request.cliente_id)
        .await?
        .ok_or_else(|| ApiError::validation("El cliente especificado no existe"))?;

    let identificador = generar_identificador();
    let fecha = Utc::now().date_naive();

    let remision = db::create_remision(
        &state.pool,
        fecha,
        cliente.id,
        &identificador,
        &request.articulos,
    )
    .await?;

    tracing::info!(
        "Remisión {} created with id {} for cliente {}",
        remision.identificador,
        remision.id,
        cliente.id
    );

    let detalles = db::get_detalles_remision(&state.pool, remision.id).await?;
    let documento = pdf::render_remision(&remision, &cliente, &detalles)?;

    match (&state.mailer, cliente.email.as_deref()) {
        (Some(mailer), Some(email)) => {
            mailer
                .send_remision(email, &remision.identificador, documento)
                .await?;
        }
        (None, _) => {
            tracing::warn!(
                "SMTP not configured, remisión {} not emailed",
                remision.identificador
            );
        }
        (_, None) => {
            tracing::warn!(
                "Cliente {} has no email address, remisión {} not emailed",
                cliente.id,
                remision.identificador
            );
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(CrearRemisionResponse {
            message: "Remisión creada con éxito".to_string(),
            remision_id: remision.id,
            identificador: remision.identificador,
        }),
    ))
}
