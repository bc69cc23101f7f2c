//! Article catalog types.

use serde::{Deserialize, Serialize};

/// An article row as stored and as sent to clients.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Articulo {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: Option<f64>,
}

/// Request body for adding an article.
#[derive(Debug, Deserialize)]
pub struct ArticuloPayload {
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: Option<f64>,
}

/// Response wrapper for the article list.
#[derive(Debug, Serialize)]
pub struct ArticulosResponse {
    pub message: String,
    pub articulos: Vec<Articulo>,
}
