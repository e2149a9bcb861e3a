pub mod block;
pub mod complaint;
pub mod resident;

use serde::Serialize;
use utoipa::ToSchema;

// Resposta simples de sucesso: {"message": "..."}
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
