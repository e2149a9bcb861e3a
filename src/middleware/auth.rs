// src/middleware/auth.rs

use axum::{
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::{
    common::{de::parse_optional_i32, error::{ApiError, AppError}},
    config::AppState,
    middleware::i18n::Locale,
};

/// ID do morador que faz a requisição, lido de `?user_id=`.
///
/// Não há prova criptográfica de identidade: o cliente simplesmente declara
/// quem é. Essa fronteira de confiança é assumida pela API; quem chama é
/// resolvido no banco a cada requisição (ver `services::identity`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerId(pub i32);

#[derive(Debug, Deserialize)]
struct CallerQuery {
    user_id: Option<String>,
}

impl CallerId {
    pub fn from_parts(parts: &Parts) -> Result<Self, AppError> {
        let raw = Query::<CallerQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.user_id);

        parse_optional_i32(raw.as_deref())
            .map(CallerId)
            .ok_or(AppError::MissingCallerId)
    }
}

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        CallerId::from_parts(parts).map_err(|e| {
            let app_state = AppState::from_ref(state);
            e.to_api_error(&Locale::from_parts(parts), &app_state.i18n_store)
        })
    }
}
