//! Client catalog: models, database access and HTTP handlers.

pub mod db;
pub mod handlers;
pub mod model;

pub use model::{Cliente, ClientePayload};
