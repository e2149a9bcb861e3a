// Regras decididas antes de qualquer acesso ao banco.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{offline_app, send};

#[tokio::test]
async fn health_endpoint_responds() {
    let app = offline_app();
    let res = send(&app, Method::GET, "/api/health", None, None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, "OK");
}

#[tokio::test]
async fn listing_users_requires_user_id() {
    let app = offline_app();
    let res = send(&app, Method::GET, "/api/users", None, None).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "ID de usuário requisitante é obrigatório.");
}

#[tokio::test]
async fn error_messages_follow_accept_language() {
    let app = offline_app();
    let res = send(&app, Method::GET, "/api/users", None, Some("en-US,en;q=0.8")).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Requesting user id is required.");
}

#[tokio::test]
async fn non_numeric_user_id_is_a_bad_request() {
    let app = offline_app();
    let res = send(&app, Method::GET, "/api/complaints?user_id=abc", None, None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mutations_without_caller_are_rejected() {
    let app = offline_app();

    let res = send(&app, Method::DELETE, "/api/users/3", None, None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = send(
        &app,
        Method::PUT,
        "/api/users/3/role",
        Some(json!({ "new_role": "admin_bloco" })),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = send(
        &app,
        Method::PUT,
        "/api/complaints/1",
        Some(json!({ "status": "resolvido" })),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_reports_every_missing_field() {
    let app = offline_app();
    let res = send(&app, Method::POST, "/api/register", Some(json!({})), None).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    for field in ["nome", "email", "password", "bloco", "apartment"] {
        assert!(res.body["details"].get(field).is_some(), "faltou {field}");
    }
}

#[tokio::test]
async fn register_rejects_the_administrative_block() {
    let app = offline_app();
    let res = send(
        &app,
        Method::POST,
        "/api/register",
        Some(json!({
            "nome": "Ana",
            "email": "ana@example.com",
            "password": "segredo",
            "bloco": 0,
            "apartment": 0
        })),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["details"].get("bloco").is_some());
    assert!(res.body["details"].get("apartment").is_some());
}

#[tokio::test]
async fn mistyped_body_uses_the_api_error_shape() {
    let app = offline_app();
    let res = send(
        &app,
        Method::POST,
        "/api/register",
        Some(json!({ "nome": "Ana", "bloco": true })),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["error"]
        .as_str()
        .unwrap()
        .starts_with("Corpo da requisição inválido:"));

    let res = send(
        &app,
        Method::PUT,
        "/api/users/3/role?user_id=1",
        Some(json!({ "new_role": 7 })),
        Some("en"),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body:"));
}

#[tokio::test]
async fn complaint_requires_subject_and_description() {
    let app = offline_app();
    let res = send(
        &app,
        Method::POST,
        "/api/complaints",
        Some(json!({ "user_id": 1, "subject": "" })),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["details"].get("subject").is_some());
    assert!(res.body["details"].get("description").is_some());
    assert!(res.body["details"].get("user_id").is_none());
}

#[tokio::test]
async fn store_failures_surface_as_internal_errors() {
    let app = offline_app();
    let res = send(&app, Method::GET, "/api/users?user_id=1", None, None).await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.body["error"]
        .as_str()
        .unwrap()
        .starts_with("Erro de banco de dados:"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = offline_app();
    let res = send(&app, Method::GET, "/api-docs/openapi.json", None, None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body["paths"].get("/api/complaints/{id}").is_some());
}
