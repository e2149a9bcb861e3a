// src/handlers/users.rs

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{
        de::parse_optional_i32,
        error::{ApiError, AppError},
    },
    config::AppState,
    middleware::{auth::CallerId, i18n::Locale},
    models::{
        resident::{ListUsersQuery, ResidentListing, UpdateRolePayload},
        MessageResponse,
    },
};

// GET /api/users?user_id=&bloco_id_filter=
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(
        ("user_id" = i32, Query, description = "ID de quem faz a requisição"),
        ("bloco_id_filter" = Option<i32>, Query, description = "Filtro de bloco (só para o síndico)")
    ),
    responses(
        (status = 200, description = "Moradores visíveis para quem chama", body = Vec<ResidentListing>),
        (status = 400, description = "user_id ausente"),
        (status = 401, description = "Usuário requisitante inexistente"),
        (status = 403, description = "Moradores comuns não listam usuários")
    )
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    locale: Locale,
    caller: CallerId,
    Query(query): Query<ListUsersQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let block_filter = parse_optional_i32(query.bloco_id_filter.as_deref());

    let residents = app_state
        .resident_service
        .list_residents(caller, block_filter)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(residents)))
}

// PUT /api/users/{target_id}/role?user_id=
#[utoipa::path(
    put,
    path = "/api/users/{target_id}/role",
    tag = "Users",
    request_body = UpdateRolePayload,
    params(
        ("target_id" = i32, Path, description = "Morador alvo"),
        ("user_id" = i32, Query, description = "ID de quem faz a requisição")
    ),
    responses(
        (status = 200, description = "Role atualizada", body = MessageResponse),
        (status = 400, description = "Role inválida ou tentativa de alterar a própria role"),
        (status = 403, description = "Apenas o síndico altera roles"),
        (status = 404, description = "Morador alvo inexistente")
    )
)]
pub async fn update_role(
    State(app_state): State<AppState>,
    locale: Locale,
    caller: CallerId,
    Path(target_id): Path<i32>,
    payload: Result<Json<UpdateRolePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) =
        payload.map_err(|e| AppError::from(e).to_api_error(&locale, &app_state.i18n_store))?;

    let role = app_state
        .resident_service
        .update_role(caller, target_id, payload.new_role.as_deref())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new(format!(
            "Role do usuário {} atualizada para {}.",
            target_id, role
        ))),
    ))
}

// DELETE /api/users/{target_id}?user_id=
#[utoipa::path(
    delete,
    path = "/api/users/{target_id}",
    tag = "Users",
    params(
        ("target_id" = i32, Path, description = "Morador alvo"),
        ("user_id" = i32, Query, description = "ID de quem faz a requisição")
    ),
    responses(
        (status = 200, description = "Morador e reclamações excluídos", body = MessageResponse),
        (status = 400, description = "Tentativa de excluir a si mesmo"),
        (status = 403, description = "Sem permissão sobre o alvo"),
        (status = 404, description = "Morador alvo inexistente")
    )
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    locale: Locale,
    caller: CallerId,
    Path(target_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .resident_service
        .delete_resident(caller, target_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new(format!(
            "Usuário {} e seus dados associados foram excluídos com sucesso.",
            target_id
        ))),
    ))
}
