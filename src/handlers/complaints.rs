// src/handlers/complaints.rs

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::CallerId, i18n::Locale},
    models::{
        complaint::{ComplaintListing, CreateComplaintPayload, UpdateComplaintPayload},
        MessageResponse,
    },
};

// POST /api/complaints
#[utoipa::path(
    post,
    path = "/api/complaints",
    tag = "Complaints",
    request_body = CreateComplaintPayload,
    responses(
        (status = 201, description = "Reclamação registrada", body = MessageResponse),
        (status = 400, description = "Campo obrigatório ausente"),
        (status = 401, description = "Autor inexistente")
    )
)]
pub async fn create_complaint(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<CreateComplaintPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) =
        payload.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let author = payload
        .user_id
        .map(CallerId)
        .ok_or_else(|| AppError::MissingCallerId.to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .complaint_service
        .create_complaint(author, &payload.subject, &payload.description)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Reclamação registrada com sucesso")),
    ))
}

// GET /api/complaints?user_id=
#[utoipa::path(
    get,
    path = "/api/complaints",
    tag = "Complaints",
    params(
        ("user_id" = i32, Query, description = "ID de quem faz a requisição")
    ),
    responses(
        (status = 200, description = "Reclamações visíveis, mais novas primeiro", body = Vec<ComplaintListing>),
        (status = 400, description = "user_id ausente"),
        (status = 401, description = "Usuário requisitante inexistente")
    )
)]
pub async fn list_complaints(
    State(app_state): State<AppState>,
    locale: Locale,
    caller: CallerId,
) -> Result<impl IntoResponse, ApiError> {
    let complaints = app_state
        .complaint_service
        .list_complaints(caller)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(complaints)))
}

// PUT /api/complaints/{id}?user_id=
#[utoipa::path(
    put,
    path = "/api/complaints/{id}",
    tag = "Complaints",
    request_body = UpdateComplaintPayload,
    params(
        ("id" = i32, Path, description = "Reclamação"),
        ("user_id" = i32, Query, description = "ID de quem faz a requisição")
    ),
    responses(
        (status = 200, description = "Reclamação atualizada", body = MessageResponse),
        (status = 400, description = "status ausente"),
        (status = 403, description = "Sem permissão sobre a reclamação"),
        (status = 404, description = "Reclamação inexistente")
    )
)]
pub async fn update_complaint(
    State(app_state): State<AppState>,
    locale: Locale,
    caller: CallerId,
    Path(complaint_id): Path<i32>,
    payload: Result<Json<UpdateComplaintPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) =
        payload.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    app_state
        .complaint_service
        .update_complaint(
            caller,
            complaint_id,
            payload.status.as_deref(),
            payload.admin_comment.as_deref(),
        )
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Reclamação atualizada com sucesso.")),
    ))
}
