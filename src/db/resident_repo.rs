// src/db/resident_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::resident::{Caller, LoginRecord, ResidentListing, ResidentTarget, Role},
    services::scope::ResidentScope,
};

// O repositório de moradores, responsável por todas as interações com a tabela 'moradores'
#[derive(Clone)]
pub struct ResidentRepository {
    pool: PgPool,
}

impl ResidentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Papel e vínculo (apartamento -> bloco) de um morador.
    pub async fn find_caller<'e, E>(&self, executor: E, id: i32) -> Result<Option<Caller>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let caller = sqlx::query_as::<_, Caller>(
            r#"
            SELECT m.morador_id AS id, m.role, a.bloco_id AS block_id
            FROM moradores m
            JOIN apartamentos a ON m.apartamento_id = a.apartamento_id
            WHERE m.morador_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(caller)
    }

    pub async fn find_target<'e, E>(
        &self,
        executor: E,
        id: i32,
    ) -> Result<Option<ResidentTarget>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let target = sqlx::query_as::<_, ResidentTarget>(
            r#"
            SELECT m.morador_id AS id, m.role, a.bloco_id AS block_id
            FROM moradores m
            JOIN apartamentos a ON m.apartamento_id = a.apartamento_id
            WHERE m.morador_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(target)
    }

    // Busca o morador pelo e-mail, já com bloco e apartamento, para o login
    pub async fn find_login_by_email(&self, email: &str) -> Result<Option<LoginRecord>, AppError> {
        let record = sqlx::query_as::<_, LoginRecord>(
            r#"
            SELECT
                m.morador_id AS id, m.nome, m.email, m.password AS password_hash, m.role,
                b.bloco_id, b.numero_bloco AS bloco, a.numero_apartamento AS apartment
            FROM moradores m
            JOIN apartamentos a ON m.apartamento_id = a.apartamento_id
            JOIN blocos b ON a.bloco_id = b.bloco_id
            WHERE m.email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    // Cria um novo morador. A role é sempre 'morador' (o DEFAULT da coluna).
    pub async fn create_resident<'e, E>(
        &self,
        executor: E,
        nome: &str,
        email: &str,
        password_hash: &str,
        apartment_id: i32,
    ) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO moradores (nome, email, password, apartamento_id, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING morador_id
            "#,
        )
        .bind(nome)
        .bind(email)
        .bind(password_hash)
        .bind(apartment_id)
        .bind(Role::Morador)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            // A única chave única de 'moradores' é o e-mail
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::EmailAlreadyExists;
                }
            }
            e.into()
        })
    }

    pub async fn list_residents<'e, E>(
        &self,
        executor: E,
        scope: &ResidentScope,
    ) -> Result<Vec<ResidentListing>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let mut query = scope.listing_query();
        let residents = query
            .build_query_as::<ResidentListing>()
            .fetch_all(executor)
            .await?;

        Ok(residents)
    }

    pub async fn update_role<'e, E>(&self, executor: E, id: i32, role: Role) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE moradores SET role = $1 WHERE morador_id = $2")
            .bind(role)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_resident<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM moradores WHERE morador_id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
