/**
 * Client Handlers
 *
 * HTTP handlers for the client catalog: create, list, search, fetch by
 * id, edit and delete. All of these sit behind the authentication
 * middleware.
 *
 * # Endpoints
 *
 * - `POST /cliente/crear` - create a client
 * - `GET /cliente/clientes` - list all clients
 * - `GET /cliente/buscar?q=` - partial search over nombre/rfc/email
 * - `GET /cliente/cliente/{id}` - fetch one client
 * - `PUT /cliente/editar/{id}` - update a client
 * - `DELETE /cliente/borrar/{id}` - delete a client
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::clientes::db;
use crate::clientes::model::{ClientePayload, ClienteResponse, ClientesResponse};
use crate::error::ApiError;

/// Query parameters for the client search endpoint.
#[derive(Debug, Deserialize)]
pub struct BusquedaClientes {
    pub q: Option<String>,
}

/// Create a client
///
/// # Errors
///
/// * `400 Bad Request` - missing client name
/// * `500 Internal Server Error` - database failure
pub async fn crear_cliente(
    State(pool): State<PgPool>,
    Json(payload): Json<ClientePayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    tracing::info!("Creating cliente: {}", payload.nombre);

    if payload.nombre.trim().is_empty() {
        return Err(ApiError::validation("El nombre del cliente es obligatorio"));
    }

    let cliente = db::create_cliente(&pool, &payload).await?;
    tracing::info!("Cliente created with id {}", cliente.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Cliente creado con éxito" })),
    ))
}

/// List all clients
pub async fn listar_clientes(
    State(pool): State<PgPool>,
) -> Result<Json<ClientesResponse>, ApiError> {
    let clientes = db::list_clientes(&pool).await?;
    tracing::info!("Listed {} clientes", clientes.len());

    Ok(Json(ClientesResponse {
        message: "Clientes obtenidos exitosamente".to_string(),
        clientes,
    }))
}

/// Search clients by partial match
///
/// Matches `q` case-insensitively against nombre, rfc and email.
/// Without `q` the full list is returned.
///
/// # Errors
///
/// * `404 Not Found` - no client matched the search term
/// * `500 Internal Server Error` - database failure
pub async fn buscar_clientes(
    State(pool): State<PgPool>,
    Query(params): Query<BusquedaClientes>,
) -> Result<Json<ClientesResponse>, ApiError> {
    let clientes = match params.q.as_deref() {
        Some(term) if !term.is_empty() => {
            tracing::info!("Searching clientes for: {}", term);
            db::search_clientes(&pool, term).await?
        }
        _ => db::list_clientes(&pool).await?,
    };

    if clientes.is_empty() {
        return Err(ApiError::not_found(
            "No se encontraron clientes que coincidan con la búsqueda.",
        ));
    }

    Ok(Json(ClientesResponse {
        message: "Clientes obtenidos exitosamente".to_string(),
        clientes,
    }))
}

/// Fetch a single client by id
///
/// # Errors
///
/// * `404 Not Found` - no client with this id
/// * `500 Internal Server Error` - database failure
pub async fn obtener_cliente(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<ClienteResponse>, ApiError> {
    let cliente = db::get_cliente(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Cliente no encontrado."))?;

    Ok(Json(ClienteResponse {
        message: "Cliente obtenido exitosamente".to_string(),
        cliente,
    }))
}

/// Update a client by id
///
/// # Errors
///
/// * `404 Not Found` - no client with this id
/// * `500 Internal Server Error` - database failure
pub async fn editar_cliente(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<ClientePayload>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!("Updating cliente {}", id);

    let updated = db::update_cliente(&pool, id, &payload).await?;
    if !updated {
        return Err(ApiError::not_found("Cliente no encontrado."));
    }

    Ok(Json(json!({ "message": "Cliente actualizado con éxito" })))
}

/// Delete a client by id
///
/// # Errors
///
/// * `404 Not Found` - no client with this id
/// * `500 Internal Server Error` - database failure
pub async fn borrar_cliente(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!("Deleting cliente {}", id);

    let deleted = db::delete_cliente(&pool, id).await?;
    if !deleted {
        return Err(ApiError::not_found("Cliente no encontrado."));
    }

    Ok(Json(json!({ "message": "Cliente eliminado con éxito" })))
}
