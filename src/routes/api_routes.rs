/**
 * API Route Configuration
 *
 * This module defines the route tables for the HTTP API.
 *
 * # Routes
 *
 * ## Public
 * - `POST /usuario/registro` - User registration
 * - `POST /usuario/login` - User login, returns a JWT
 *
 * ## Token-protected
 * - `POST /cliente/crear` - Create a client
 * - `GET /cliente/clientes` - List all clients
 * - `GET /cliente/buscar` - Search clients
 * - `GET /cliente/cliente/{id}` - Fetch one client
 * - `PUT /cliente/editar/{id}` - Update a client
 * - `DELETE /cliente/borrar/{id}` - Delete a client
 * - `POST /articulo/agregar` - Add an article
 * - `GET /articulo/articulos` - List all articles
 * - `POST /remision/crear-remision` - Create a remisión
 * - `GET /remision/buscar` - Search remisiones
 * - `PUT /remision/actualizar-remision/{identificador}` - Update a remisión
 * - `DELETE /remision/borrar-remision/{identificador}` - Delete a remisión
 *
 * Protected routes require a `Authorization: Bearer <token>` header;
 * the token only has to be valid, there is no finer-grained
 * authorization model.
 */

use axum::{middleware, routing, Router};

use crate::articulos::handlers::{agregar_articulo, listar_articulos};
use crate::auth::{login, registro};
use crate::clientes::handlers::{
    borrar_cliente, buscar_clientes, crear_cliente, editar_cliente, listar_clientes,
    obtener_cliente,
};
use crate::middleware::auth_middleware;
use crate::remisiones::handlers::{
    actualizar_remision, borrar_remision, buscar_remisiones, crear_remision,
};
use crate::server::state::AppState;

/// Public routes: registration and login.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/usuario/registro", routing::post(registro))
        .route("/usuario/login", routing::post(login))
}

/// Token-protected routes: clients, articles and remisiones.
pub fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Clients
        .route("/cliente/crear", routing::post(crear_cliente))
        .route("/cliente/clientes", routing::get(listar_clientes))
        .route("/cliente/buscar", routing::get(buscar_clientes))
        .route("/cliente/cliente/{id}", routing::get(obtener_cliente))
        .route("/cliente/editar/{id}", routing::put(editar_cliente))
        .route("/cliente/borrar/{id}", routing::delete(borrar_cliente))
        // Articles
        .route("/articulo/agregar", routing::post(agregar_articulo))
        .route("/articulo/articulos", routing::get(listar_articulos))
        // Remisiones
        .route("/remision/crear-remision", routing::post(crear_remision))
        .route("/remision/buscar", routing::get(buscar_remisiones))
        .route(
            "/remision/actualizar-remision/{identificador}",
            routing::put(actualizar_remision),
        )
        .route(
            "/remision/borrar-remision/{identificador}",
            routing::delete(borrar_remision),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
