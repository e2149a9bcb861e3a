// src/db/block_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{common::error::AppError, models::block::Block};

// Blocos e apartamentos: criados no provisionamento, só leitura para a API
#[derive(Clone)]
pub struct BlockRepository {
    pool: PgPool,
}

impl BlockRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_blocks(&self) -> Result<Vec<Block>, AppError> {
        let blocks = sqlx::query_as::<_, Block>(
            "SELECT bloco_id, numero_bloco FROM blocos ORDER BY numero_bloco",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(blocks)
    }

    /// Resolve (número do bloco, número do apartamento) para o ID do apartamento.
    pub async fn find_apartment_id<'e, E>(
        &self,
        executor: E,
        block_number: i32,
        apartment_number: i32,
    ) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let apartment_id = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT a.apartamento_id
            FROM apartamentos a
            JOIN blocos b ON a.bloco_id = b.bloco_id
            WHERE b.numero_bloco = $1 AND a.numero_apartamento = $2
            "#,
        )
        .bind(block_number)
        .bind(apartment_number)
        .fetch_optional(executor)
        .await?;

        Ok(apartment_id)
    }
}
