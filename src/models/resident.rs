// src/models/resident.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::de::optional_i32;

// ---
// 1. Role (enum fechado, espelha o tipo `morador_role` do Postgres)
// ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "morador_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Morador,
    AdminBloco,
    Sindico,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Morador => "morador",
            Role::AdminBloco => "admin_bloco",
            Role::Sindico => "sindico",
        }
    }

    pub fn is_admin(&self) -> bool {
        match self {
            Role::Sindico | Role::AdminBloco => true,
            Role::Morador => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("role desconhecida: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morador" => Ok(Role::Morador),
            "admin_bloco" => Ok(Role::AdminBloco),
            "sindico" => Ok(Role::Sindico),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

// ---
// 2. Quem está chamando (resolvido a cada requisição)
// ---
// O bloco vem sempre do apartamento atual: não existe escopo em cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct Caller {
    pub id: i32,
    pub role: Role,
    pub block_id: i32,
}

// Morador alvo de uma mutação (troca de role, exclusão)
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct ResidentTarget {
    pub id: i32,
    pub role: Role,
    pub block_id: i32,
}

// Linha da listagem GET /api/users
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ResidentListing {
    #[schema(example = 17)]
    pub id: i32,
    #[schema(example = "Maria Souza")]
    pub nome: String,
    #[schema(example = "maria@example.com")]
    pub email: String,
    pub role: Role,
    #[schema(example = 3)]
    pub bloco: i32,
    #[schema(example = 42)]
    pub apartment: i32,
}

// Registro completo usado só no login (inclui o digest da senha)
#[derive(Debug, Clone, FromRow)]
pub struct LoginRecord {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub bloco_id: i32,
    pub bloco: i32,
    pub apartment: i32,
}

// ---
// 3. Payloads
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterResidentPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Maria Souza")]
    pub nome: String,

    #[serde(default)]
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "maria@example.com")]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "A senha é obrigatória."))]
    pub password: String,

    #[serde(default, deserialize_with = "optional_i32")]
    #[validate(
        required(message = "O bloco é obrigatório."),
        range(min = 1, message = "O bloco 0 é reservado à administração.")
    )]
    #[schema(value_type = i32, example = 3)]
    pub bloco: Option<i32>,

    #[serde(default, deserialize_with = "optional_i32")]
    #[validate(
        required(message = "O apartamento é obrigatório."),
        range(min = 1, message = "Apartamento inválido.")
    )]
    #[schema(value_type = i32, example = 42)]
    pub apartment: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginPayload {
    #[serde(default)]
    #[schema(example = "maria@example.com")]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRolePayload {
    #[serde(default)]
    #[schema(example = "admin_bloco")]
    pub new_role: Option<String>,
}

// ---
// 4. Respostas
// ---
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub is_admin: bool,
    pub role: Role,
    pub bloco_id: i32,
    pub bloco: i32,
    pub apartment: i32,
}

impl From<LoginRecord> for LoginResponse {
    fn from(record: LoginRecord) -> Self {
        Self {
            id: record.id,
            nome: record.nome,
            email: record.email,
            is_admin: record.role.is_admin(),
            role: record.role,
            bloco_id: record.bloco_id,
            bloco: record.bloco,
            apartment: record.apartment,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub bloco_id_filter: Option<String>,
}
