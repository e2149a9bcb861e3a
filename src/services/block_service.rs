// src/services/block_service.rs

use crate::{common::error::AppError, db::BlockRepository, models::block::Block};

#[derive(Clone)]
pub struct BlockService {
    repo: BlockRepository,
}

impl BlockService {
    pub fn new(repo: BlockRepository) -> Self {
        Self { repo }
    }

    pub async fn list_blocks(&self) -> Result<Vec<Block>, AppError> {
        self.repo.list_blocks().await
    }
}
