//! Client API integration tests
//!
//! End-to-end tests for the client catalog: create, list, search,
//! fetch, edit and delete. Ignored by default; they need a running
//! PostgreSQL instance.

mod common;

use axum::http::{header::AUTHORIZATION, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use serial_test::serial;

use common::{auth_header, registrar_y_login, spawn_server, TestDatabase};

async fn crear_cliente(server: &TestServer, token: &str, nombre: &str, rfc: &str) {
    let response = server
        .post("/cliente/crear")
        .add_header(AUTHORIZATION, auth_header(token))
        .json(&json!({
            "nombre": nombre,
            "domicilio": "Calle Hidalgo 23, Centro",
            "rfc": rfc,
            "telefono": "5512345678",
            "email": "compras@example.mx",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_crear_and_listar_clientes() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;
    let token = registrar_y_login(&server).await;

    crear_cliente(&server, &token, "Ferretería Los Pinos", "FLP120830QX1").await;

    let response = server
        .get("/cliente/clientes")
        .add_header(AUTHORIZATION, auth_header(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["clientes"].as_array().unwrap().len(), 1);
    assert_eq!(body["clientes"][0]["nombre"], "Ferretería Los Pinos");
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_crear_cliente_requires_nombre() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;
    let token = registrar_y_login(&server).await;

    let response = server
        .post("/cliente/crear")
        .add_header(AUTHORIZATION, auth_header(&token))
        .json(&json!({ "nombre": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_buscar_clientes_partial_case_insensitive() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;
    let token = registrar_y_login(&server).await;

    crear_cliente(&server, &token, "Ferretería Del Norte", "FDN050214AB2").await;
    crear_cliente(&server, &token, "Papelería Central", "PCE980702CD3").await;

    let response = server
        .get("/cliente/buscar")
        .add_query_param("q", "norte")
        .add_header(AUTHORIZATION, auth_header(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let clientes = body["clientes"].as_array().unwrap();
    assert_eq!(clientes.len(), 1);
    assert_eq!(clientes[0]["nombre"], "Ferretería Del Norte");
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_buscar_clientes_no_match_is_not_found() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;
    let token = registrar_y_login(&server).await;

    crear_cliente(&server, &token, "Papelería Central", "PCE980702CD3").await;

    let response = server
        .get("/cliente/buscar")
        .add_query_param("q", "inexistente")
        .add_header(AUTHORIZATION, auth_header(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_obtener_cliente_by_id() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;
    let token = registrar_y_login(&server).await;

    crear_cliente(&server, &token, "Ferretería Los Pinos", "FLP120830QX1").await;

    let lista: Value = server
        .get("/cliente/clientes")
        .add_header(AUTHORIZATION, auth_header(&token))
        .await
        .json();
    let id = lista["clientes"][0]["id"].as_i64().unwrap();

    let response = server
        .get(&format!("/cliente/cliente/{id}"))
        .add_header(AUTHORIZATION, auth_header(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["cliente"]["id"].as_i64(), Some(id));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_obtener_cliente_unknown_id_is_not_found() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;
    let token = registrar_y_login(&server).await;

    let response = server
        .get("/cliente/cliente/424242")
        .add_header(AUTHORIZATION, auth_header(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_editar_cliente() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;
    let token = registrar_y_login(&server).await;

    crear_cliente(&server, &token, "Ferretería Los Pinos", "FLP120830QX1").await;

    let lista: Value = server
        .get("/cliente/clientes")
        .add_header(AUTHORIZATION, auth_header(&token))
        .await
        .json();
    let id = lista["clientes"][0]["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/cliente/editar/{id}"))
        .add_header(AUTHORIZATION, auth_header(&token))
        .json(&json!({
            "nombre": "Ferretería Los Pinos de Occidente",
            "domicilio": "Av. Vallarta 2405",
            "rfc": "FLP120830QX1",
            "telefono": null,
            "email": null,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let actualizado: Value = server
        .get(&format!("/cliente/cliente/{id}"))
        .add_header(AUTHORIZATION, auth_header(&token))
        .await
        .json();
    assert_eq!(
        actualizado["cliente"]["nombre"],
        "Ferretería Los Pinos de Occidente"
    );
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_borrar_cliente() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;
    let token = registrar_y_login(&server).await;

    crear_cliente(&server, &token, "Ferretería Los Pinos", "FLP120830QX1").await;

    let lista: Value = server
        .get("/cliente/clientes")
        .add_header(AUTHORIZATION, auth_header(&token))
        .await
        .json();
    let id = lista["clientes"][0]["id"].as_i64().unwrap();

    let response = server
        .delete(&format!("/cliente/borrar/{id}"))
        .add_header(AUTHORIZATION, auth_header(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let tras_borrar = server
        .get(&format!("/cliente/cliente/{id}"))
        .add_header(AUTHORIZATION, auth_header(&token))
        .await;
    assert_eq!(tras_borrar.status_code(), StatusCode::NOT_FOUND);
}
