//! Remisiones: identifier generation, models, database access and HTTP
//! handlers for the delivery-slip workflow.

pub mod db;
pub mod handlers;
pub mod identifier;
pub mod model;

pub use identifier::generar_identificador;
