// src/db/complaint_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::complaint::{ComplaintListing, ComplaintRow, ComplaintTarget, INITIAL_STATUS},
    services::scope::ComplaintScope,
};

// Todas as operações aqui rodam no executor da requisição (conexão ou transação)
#[derive(Clone)]
pub struct ComplaintRepository {
    // Fuso em que as datas são devolvidas (nome IANA, ex.: "America/Sao_Paulo")
    timezone: String,
}

impl ComplaintRepository {
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
        }
    }

    // A data fica por conta do DEFAULT da coluna (relógio do servidor)
    pub async fn create_complaint<'e, E>(
        &self,
        executor: E,
        author_id: i32,
        subject: &str,
        description: &str,
    ) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO complaints (user_id, subject, description, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(author_id)
        .bind(subject)
        .bind(description)
        .bind(INITIAL_STATUS)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    pub async fn list_complaints<'e, E>(
        &self,
        executor: E,
        scope: &ComplaintScope,
    ) -> Result<Vec<ComplaintListing>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let mut query = scope.listing_query(&self.timezone);
        let rows = query
            .build_query_as::<ComplaintRow>()
            .fetch_all(executor)
            .await?;

        Ok(rows.into_iter().map(ComplaintListing::from).collect())
    }

    /// Reclamação + bloco atual do autor.
    pub async fn find_target<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<ComplaintTarget>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let target = sqlx::query_as::<_, ComplaintTarget>(
            r#"
            SELECT c.id, a.bloco_id AS block_id
            FROM complaints c
            JOIN moradores m ON c.user_id = m.morador_id
            JOIN apartamentos a ON m.apartamento_id = a.apartamento_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(target)
    }

    pub async fn update_status<'e, E>(
        &self,
        executor: E,
        id: i32,
        status: &str,
        admin_comment: Option<&str>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result =
            sqlx::query("UPDATE complaints SET status = $1, admin_comment = $2 WHERE id = $3")
                .bind(status)
                .bind(admin_comment)
                .bind(id)
                .execute(executor)
                .await?;

        Ok(result.rows_affected())
    }

    // Dependentes de um morador, apagados antes dele na mesma transação
    pub async fn delete_by_author<'e, E>(&self, executor: E, author_id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM complaints WHERE user_id = $1")
            .bind(author_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
