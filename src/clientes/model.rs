//! Client model and payload types.

use serde::{Deserialize, Serialize};

/// Client row from the `clientes` table.
///
/// Everything except the name is optional; the RFC is stored as an
/// opaque string.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cliente {
    pub id: i64,
    pub nombre: String,
    pub domicilio: Option<String>,
    pub rfc: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

/// Request body for creating or updating a client.
#[derive(Debug, Deserialize)]
pub struct ClientePayload {
    pub nombre: String,
    pub domicilio: Option<String>,
    pub rfc: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

/// Response for list and search endpoints.
#[derive(Debug, Serialize)]
pub struct ClientesResponse {
    pub message: String,
    pub clientes: Vec<Cliente>,
}

/// Response for the single-client endpoint.
#[derive(Debug, Serialize)]
pub struct ClienteResponse {
    pub message: String,
    pub cliente: Cliente,
}
