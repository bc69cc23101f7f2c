//! Request and response types for the remisión endpoints.
//!
//! The wire format keeps the camelCase field names the frontend sends
//! (`clienteId`, `articuloId`, `remisionId`); database-shaped objects
//! inside result lists stay snake_case.

use serde::{Deserialize, Serialize};

use crate::remisiones::model::{ArticuloRemision, RemisionConDetalles};

/// Request body for `POST /remision/crear-remision`.
#[derive(Debug, Deserialize)]
pub struct CrearRemisionRequest {
    #[serde(rename = "clienteId")]
    pub cliente_id: i64,
    pub articulos: Vec<ArticuloRemision>,
}

/// Response body for a created remisión.
#[derive(Debug, Serialize)]
pub struct CrearRemisionResponse {
    pub message: String,
    #[serde(rename = "remisionId")]
    pub remision_id: i64,
    pub identificador: String,
}

/// Request body for `PUT /remision/actualizar-remision/{identificador}`.
#[derive(Debug, Deserialize)]
pub struct ActualizarRemisionRequest {
    #[serde(rename = "clienteId")]
    pub cliente_id: i64,
    pub articulos: Vec<ArticuloRemision>,
}

/// Query parameters for the remisión search.
#[derive(Debug, Deserialize)]
pub struct BusquedaRemisiones {
    pub identificador: Option<String>,
}

/// Response body for the remisión search.
#[derive(Debug, Serialize)]
pub struct BusquedaRemisionesResponse {
    pub message: String,
    pub remisiones: Vec<RemisionConDetalles>,
}
