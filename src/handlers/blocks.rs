// src/handlers/blocks.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError, config::AppState, middleware::i18n::Locale, models::block::Block,
};

// GET /api/blocks
#[utoipa::path(
    get,
    path = "/api/blocks",
    tag = "Blocks",
    responses(
        (status = 200, description = "Blocos ordenados pelo número", body = Vec<Block>)
    )
)]
pub async fn list_blocks(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let blocks = app_state
        .block_service
        .list_blocks()
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(blocks)))
}
