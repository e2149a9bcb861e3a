// src/services/identity.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    db::ResidentRepository,
    middleware::auth::CallerId,
    models::resident::Caller,
};

/// Resolve o `user_id` declarado pelo cliente para papel + bloco atuais.
/// Porta de entrada de toda operação que depende de quem chama.
#[derive(Clone)]
pub struct IdentityResolver {
    resident_repo: ResidentRepository,
}

impl IdentityResolver {
    pub fn new(resident_repo: ResidentRepository) -> Self {
        Self { resident_repo }
    }

    // Roda no executor da própria requisição (conexão ou transação)
    pub async fn resolve<'e, E>(&self, executor: E, caller_id: CallerId) -> Result<Caller, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.find(executor, caller_id)
            .await?
            .ok_or(AppError::UnknownCaller)
    }

    /// Como `resolve`, mas deixa a regra de autorização decidir o que fazer
    /// com um requisitante inexistente (as mutações respondem 403).
    pub async fn find<'e, E>(&self, executor: E, caller_id: CallerId) -> Result<Option<Caller>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.resident_repo.find_caller(executor, caller_id.0).await
    }
}
