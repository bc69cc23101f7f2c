//! Authentication API integration tests
//!
//! End-to-end tests for registration, login and bearer-token route
//! protection. They need a running PostgreSQL instance (see
//! `tests/common/mod.rs`), so they are ignored by default.

mod common;

use axum::http::{header::AUTHORIZATION, StatusCode};
use serde_json::{json, Value};
use serial_test::serial;

use common::{auth_header, registrar_y_login, spawn_server, TestDatabase};

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_registro_and_login_roundtrip() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;

    let token = registrar_y_login(&server).await;

    assert!(!token.is_empty());
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_registro_rejects_short_password() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;

    let response = server
        .post("/usuario/registro")
        .json(&json!({
            "nombre": "Ana",
            "correo": "ana@example.com",
            "contrasena": "corta",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_registro_rejects_invalid_correo() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;

    let response = server
        .post("/usuario/registro")
        .json(&json!({
            "nombre": "Ana",
            "correo": "not-an-email",
            "contrasena": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_registro_duplicate_correo_conflicts() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;

    let payload = json!({
        "nombre": "Ana",
        "correo": "ana@example.com",
        "contrasena": "password123",
    });

    let first = server.post("/usuario/registro").json(&payload).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server.post("/usuario/registro").json(&payload).await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_wrong_password_is_bad_request() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;

    let registro = server
        .post("/usuario/registro")
        .json(&json!({
            "nombre": "Ana",
            "correo": "ana@example.com",
            "contrasena": "password123",
        }))
        .await;
    assert_eq!(registro.status_code(), StatusCode::CREATED);

    let response = server
        .post("/usuario/login")
        .json(&json!({
            "correo": "ana@example.com",
            "contrasena": "incorrecta123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].is_string());
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_unknown_correo_is_bad_request() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;

    let response = server
        .post("/usuario/login")
        .json(&json!({
            "correo": "nadie@example.com",
            "contrasena": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_protected_route_without_token() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;

    let response = server.get("/cliente/clientes").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_protected_route_with_garbage_token() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;

    let response = server
        .get("/cliente/clientes")
        .add_header(AUTHORIZATION, auth_header("garbage"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running PostgreSQL"]
async fn test_protected_route_with_valid_token() {
    let _db = TestDatabase::new().await;
    let server = spawn_server().await;

    let token = registrar_y_login(&server).await;

    let response = server
        .get("/cliente/clientes")
        .add_header(AUTHORIZATION, auth_header(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}
