// src/services/complaint_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::ComplaintRepository,
    middleware::auth::CallerId,
    models::complaint::ComplaintListing,
    services::{identity::IdentityResolver, policy, scope::ComplaintScope},
};

#[derive(Clone)]
pub struct ComplaintService {
    identity: IdentityResolver,
    repo: ComplaintRepository,
    pool: PgPool,
}

impl ComplaintService {
    pub fn new(identity: IdentityResolver, repo: ComplaintRepository, pool: PgPool) -> Self {
        Self {
            identity,
            repo,
            pool,
        }
    }

    pub async fn create_complaint(
        &self,
        author_id: CallerId,
        subject: &str,
        description: &str,
    ) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;

        let author = self.identity.resolve(&mut *tx, author_id).await?;
        let id = self
            .repo
            .create_complaint(&mut *tx, author.id, subject, description)
            .await?;

        tx.commit().await?;
        Ok(id)
    }

    pub async fn list_complaints(&self, caller_id: CallerId) -> Result<Vec<ComplaintListing>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let caller = self.identity.resolve(&mut *conn, caller_id).await?;
        let scope = ComplaintScope::for_caller(&caller);

        self.repo.list_complaints(&mut *conn, &scope).await
    }

    pub async fn update_complaint(
        &self,
        caller_id: CallerId,
        complaint_id: i32,
        new_status: Option<&str>,
        admin_comment: Option<&str>,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let caller = self.identity.find(&mut *tx, caller_id).await?;
        let complaint = self.repo.find_target(&mut *tx, complaint_id).await?;

        let status = policy::authorize_complaint_update(
            caller.as_ref(),
            complaint_id,
            complaint.as_ref(),
            new_status,
        )?;

        self.repo
            .update_status(&mut *tx, complaint_id, status, admin_comment)
            .await?;
        tx.commit().await?;

        tracing::info!(
            "[Ação Admin] Usuário {} atualizou a reclamação {} para '{}'",
            caller_id.0,
            complaint_id,
            status
        );
        Ok(())
    }
}
