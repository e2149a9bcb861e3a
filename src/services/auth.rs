// src/services/auth.rs

use sqlx::PgPool;

use crate::{
    common::{
        error::AppError,
        password::{hash_password, verify_password},
    },
    db::{BlockRepository, ResidentRepository},
    models::resident::LoginResponse,
};

#[derive(Clone)]
pub struct AuthService {
    resident_repo: ResidentRepository,
    block_repo: BlockRepository,
    pool: PgPool,
}

impl AuthService {
    pub fn new(resident_repo: ResidentRepository, block_repo: BlockRepository, pool: PgPool) -> Self {
        Self {
            resident_repo,
            block_repo,
            pool,
        }
    }

    /// Registra um novo morador. A role é sempre `morador`.
    pub async fn register_resident(
        &self,
        nome: &str,
        email: &str,
        password: &str,
        block_number: i32,
        apartment_number: i32,
    ) -> Result<i32, AppError> {
        // 1. Hashing (fora da transação, não toca no banco)
        let hashed_password = hash_password(password).await?;

        // --- INÍCIO DA TRANSAÇÃO ---
        let mut tx = self.pool.begin().await?;

        // 2. Resolve o apartamento
        let apartment_id = self
            .block_repo
            .find_apartment_id(&mut *tx, block_number, apartment_number)
            .await?
            .ok_or(AppError::ApartmentNotFound)?;

        // 3. Cria o morador. Se o e-mail já existe, o tx sofre rollback ao sair do escopo.
        let resident_id = self
            .resident_repo
            .create_resident(&mut *tx, nome, email, &hashed_password, apartment_id)
            .await?;

        tx.commit().await?;
        // --- FIM DA TRANSAÇÃO ---

        tracing::info!(
            "🏠 Morador {} registrado no bloco {}, apto {}",
            resident_id,
            block_number,
            apartment_number
        );
        Ok(resident_id)
    }

    // E-mail inexistente e senha errada devolvem exatamente o mesmo erro
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        let record = self
            .resident_repo
            .find_login_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &record.password_hash).await? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(LoginResponse::from(record))
    }
}
