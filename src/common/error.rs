// src/common/error.rs

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

/// As seis categorias de falha que a API expõe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Unauthenticated,
    Forbidden,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            // O contrato de /api/register responde 400 para e-mail duplicado.
            ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Nosso tipo de erro de domínio. Cada variante sabe a sua categoria e a chave
// da mensagem traduzida.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Corpo da requisição inválido: {0}")]
    InvalidBody(String),

    #[error("ID de usuário requisitante é obrigatório")]
    MissingCallerId,

    #[error("Role inválida: {0}")]
    InvalidRole(String),

    #[error("O síndico não pode alterar a própria role")]
    SelfRoleChange,

    #[error("Não é permitido excluir a si mesmo")]
    SelfDeletion,

    #[error("O campo status é obrigatório")]
    MissingStatus,

    #[error("Usuário requisitante não autenticado")]
    UnknownCaller,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Moradores não podem listar usuários")]
    ResidentListingForbidden,

    #[error("Apenas o síndico pode alterar roles")]
    RoleChangeForbidden,

    #[error("Apenas administradores podem excluir usuários")]
    DeletionForbidden,

    #[error("Não é permitido excluir um síndico")]
    SindicoUndeletable,

    #[error("Morador fora do bloco do administrador")]
    ResidentOutsideBlock,

    #[error("Apenas administradores podem atualizar reclamações")]
    ComplaintUpdateForbidden,

    #[error("Reclamação fora do bloco do administrador")]
    ComplaintOutsideBlock,

    #[error("Apartamento ou bloco não encontrado")]
    ApartmentNotFound,

    #[error("Morador {0} não encontrado")]
    ResidentNotFound(i32),

    #[error("Reclamação {0} não encontrada")]
    ComplaintNotFound(i32),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),
}

// Corpo malformado ou com tipos errados: 400 no formato de erro da API
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidBody(_)
            | AppError::MissingCallerId
            | AppError::InvalidRole(_)
            | AppError::SelfRoleChange
            | AppError::SelfDeletion
            | AppError::MissingStatus => ErrorKind::BadRequest,

            AppError::UnknownCaller | AppError::InvalidCredentials => ErrorKind::Unauthenticated,

            AppError::ResidentListingForbidden
            | AppError::RoleChangeForbidden
            | AppError::DeletionForbidden
            | AppError::SindicoUndeletable
            | AppError::ResidentOutsideBlock
            | AppError::ComplaintUpdateForbidden
            | AppError::ComplaintOutsideBlock => ErrorKind::Forbidden,

            AppError::ApartmentNotFound
            | AppError::ResidentNotFound(_)
            | AppError::ComplaintNotFound(_) => ErrorKind::NotFound,

            AppError::EmailAlreadyExists => ErrorKind::Conflict,

            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_) => ErrorKind::Internal,
        }
    }

    /// Chave no catálogo de mensagens (`I18nStore`).
    pub fn message_key(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "error.validation",
            AppError::InvalidBody(_) => "error.invalid_body",
            AppError::MissingCallerId => "error.missing_caller_id",
            AppError::InvalidRole(_) => "error.invalid_role",
            AppError::SelfRoleChange => "error.self_role_change",
            AppError::SelfDeletion => "error.self_deletion",
            AppError::MissingStatus => "error.missing_status",
            AppError::UnknownCaller => "error.unknown_caller",
            AppError::InvalidCredentials => "error.invalid_credentials",
            AppError::ResidentListingForbidden => "error.resident_listing_forbidden",
            AppError::RoleChangeForbidden => "error.role_change_forbidden",
            AppError::DeletionForbidden => "error.deletion_forbidden",
            AppError::SindicoUndeletable => "error.sindico_undeletable",
            AppError::ResidentOutsideBlock => "error.resident_outside_block",
            AppError::ComplaintUpdateForbidden => "error.complaint_update_forbidden",
            AppError::ComplaintOutsideBlock => "error.complaint_outside_block",
            AppError::ApartmentNotFound => "error.apartment_not_found",
            AppError::ResidentNotFound(_) => "error.resident_not_found",
            AppError::ComplaintNotFound(_) => "error.complaint_not_found",
            AppError::EmailAlreadyExists => "error.email_already_exists",
            AppError::DatabaseError(_) => "error.database",
            AppError::InternalServerError(_) | AppError::BcryptError(_) => "error.internal",
        }
    }

    fn message_args(&self) -> Vec<(&'static str, String)> {
        match self {
            AppError::InvalidRole(role) => vec![("role", role.clone())],
            AppError::ResidentNotFound(id) | AppError::ComplaintNotFound(id) => {
                vec![("id", id.to_string())]
            }
            AppError::InvalidBody(detail) => vec![("detail", detail.clone())],
            AppError::DatabaseError(e) => vec![("detail", e.to_string())],
            _ => Vec::new(),
        }
    }

    /// Converte o erro de domínio no erro HTTP, com a mensagem no idioma do cliente.
    pub fn to_api_error(&self, locale: &Locale, store: &I18nStore) -> ApiError {
        let kind = self.kind();
        if kind == ErrorKind::Internal {
            tracing::error!("Erro Interno do Servidor: {}", self);
        }

        let error = store.translate(&locale.0, self.message_key(), &self.message_args());

        // Detalhes campo a campo apenas para erros do `validator`.
        let details = match self {
            AppError::ValidationError(errors) => {
                let mut details = serde_json::Map::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<Value> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| Value::String(m.to_string()))
                                .unwrap_or_else(|| Value::String(e.code.to_string()))
                        })
                        .collect();
                    details.insert(field.to_string(), Value::Array(messages));
                }
                Some(Value::Object(details))
            }
            _ => None,
        };

        ApiError {
            status: kind.status(),
            error,
            details,
        }
    }
}

// O erro que efetivamente sai pela API.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}
