// src/models/block.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Bloco do condomínio. O bloco 0 é a administração geral (não residencial).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Block {
    #[schema(example = 4)]
    pub bloco_id: i32,

    #[schema(example = 3)]
    pub numero_bloco: i32,
}
