// src/handlers/auth.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::{
        resident::{LoginPayload, LoginResponse, RegisterResidentPayload},
        MessageResponse,
    },
};

// POST /api/register
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Auth",
    request_body = RegisterResidentPayload,
    responses(
        (status = 201, description = "Morador registrado", body = MessageResponse),
        (status = 400, description = "Campo ausente ou e-mail já cadastrado"),
        (status = 404, description = "Bloco/apartamento inexistente")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<RegisterResidentPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) =
        payload.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    // `validate` garante que bloco e apartamento vieram
    let (Some(bloco), Some(apartment)) = (payload.bloco, payload.apartment) else {
        return Err(AppError::ApartmentNotFound.to_api_error(&locale, &app_state.i18n_store));
    };

    app_state
        .auth_service
        .register_resident(&payload.nome, &payload.email, &payload.password, bloco, apartment)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Usuário registrado com sucesso")),
    ))
}

// POST /api/login
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Credenciais válidas", body = LoginResponse),
        (status = 401, description = "E-mail ou senha inválidos")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<LoginPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) =
        payload.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let response = app_state
        .auth_service
        .login(&payload.email, &payload.password)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(response)))
}
