// src/lib.rs

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::config::AppState;

/// Monta o router completo da API sobre um `AppState` já construído.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/register", post(handlers::auth::register))
        .route("/api/login", post(handlers::auth::login))
        .route("/api/blocks", get(handlers::blocks::list_blocks))
        .route("/api/users", get(handlers::users::list_users))
        .route("/api/users/{target_id}", delete(handlers::users::delete_user))
        .route("/api/users/{target_id}/role", put(handlers::users::update_role))
        .route(
            "/api/complaints",
            post(handlers::complaints::create_complaint).get(handlers::complaints::list_complaints),
        )
        .route("/api/complaints/{id}", put(handlers::complaints::update_complaint))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
