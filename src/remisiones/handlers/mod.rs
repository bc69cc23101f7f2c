//! HTTP handlers for the remisión endpoints.

pub mod actualizar;
pub mod borrar;
pub mod buscar;
pub mod crear;
pub mod types;

pub use actualizar::actualizar_remision;
pub use borrar::borrar_remision;
pub use buscar::buscar_remisiones;
pub use crear::crear_remision;
