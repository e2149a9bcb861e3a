// src/services/resident_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{ComplaintRepository, ResidentRepository},
    middleware::auth::CallerId,
    models::resident::{ResidentListing, Role},
    services::{identity::IdentityResolver, policy, scope::ResidentScope},
};

#[derive(Clone)]
pub struct ResidentService {
    identity: IdentityResolver,
    resident_repo: ResidentRepository,
    complaint_repo: ComplaintRepository,
    pool: PgPool,
}

impl ResidentService {
    pub fn new(
        identity: IdentityResolver,
        resident_repo: ResidentRepository,
        complaint_repo: ComplaintRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            identity,
            resident_repo,
            complaint_repo,
            pool,
        }
    }

    /// Lista os moradores visíveis para quem chama.
    pub async fn list_residents(
        &self,
        caller_id: CallerId,
        block_filter: Option<i32>,
    ) -> Result<Vec<ResidentListing>, AppError> {
        // Uma única conexão para a requisição inteira; volta para a pool no drop
        let mut conn = self.pool.acquire().await?;

        let caller = self.identity.resolve(&mut *conn, caller_id).await?;
        let scope = ResidentScope::for_caller(&caller, block_filter)?;

        self.resident_repo.list_residents(&mut *conn, &scope).await
    }

    pub async fn update_role(
        &self,
        caller_id: CallerId,
        target_id: i32,
        new_role: Option<&str>,
    ) -> Result<Role, AppError> {
        let mut tx = self.pool.begin().await?;

        let caller = self.identity.find(&mut *tx, caller_id).await?;
        let target = self.resident_repo.find_target(&mut *tx, target_id).await?;

        let role =
            policy::authorize_role_update(caller.as_ref(), target_id, target.as_ref(), new_role)?;

        self.resident_repo.update_role(&mut *tx, target_id, role).await?;
        tx.commit().await?;

        tracing::info!(
            "[Ação Admin] Usuário {} alterou a role do usuário {} para {}",
            caller_id.0,
            target_id,
            role
        );
        Ok(role)
    }

    /// Exclui o morador e, antes dele, as suas reclamações. Tudo ou nada.
    pub async fn delete_resident(&self, caller_id: CallerId, target_id: i32) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        let caller = self.identity.find(&mut *tx, caller_id).await?;
        let target = self.resident_repo.find_target(&mut *tx, target_id).await?;

        policy::authorize_resident_deletion(
            caller_id.0,
            caller.as_ref(),
            target_id,
            target.as_ref(),
        )?;

        // 1. Dependentes primeiro (FK complaints.user_id)
        let removed_complaints = self
            .complaint_repo
            .delete_by_author(&mut *tx, target_id)
            .await?;

        // 2. O morador. Qualquer falha aqui desfaz o passo 1 (rollback no drop do tx).
        self.resident_repo.delete_resident(&mut *tx, target_id).await?;

        tx.commit().await?;

        tracing::info!(
            "[Ação Admin] Usuário {} excluiu o usuário {} e {} reclamação(ões)",
            caller_id.0,
            target_id,
            removed_complaints
        );
        Ok(removed_complaints)
    }
}
