//! Remisión types: database rows, line-item input and search
//! projections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A line item as submitted by clients when creating or updating a
/// remisión.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticuloRemision {
    #[serde(rename = "articuloId")]
    pub articulo_id: i64,
    pub cantidad: Option<i32>,
}

/// A remisión header row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Remision {
    pub id: i64,
    pub fecha: NaiveDate,
    pub cliente_id: i64,
    pub identificador: String,
}

/// A remisión header joined with the summary fields of its client,
/// as produced by the search query.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RemisionConCliente {
    pub id: i64,
    pub fecha: NaiveDate,
    pub cliente_id: i64,
    pub identificador: String,
    pub cliente_nombre: Option<String>,
    pub cliente_rfc: Option<String>,
}

/// A line item joined with the description and unit price of its
/// article.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DetalleConArticulo {
    pub articulo_id: i64,
    pub descripcion: Option<String>,
    pub precio: Option<f64>,
    pub cantidad: Option<i32>,
}

/// A search result: the joined header plus its line items.
#[derive(Debug, Serialize)]
pub struct RemisionConDetalles {
    #[serde(flatten)]
    pub remision: RemisionConCliente,
    pub detalles: Vec<DetalleConArticulo>,
}
