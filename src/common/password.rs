// src/common/password.rs

use bcrypt::{hash, verify};

use crate::common::error::AppError;

// O bcrypt é caro de propósito: roda fora do executor assíncrono.
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password_clone = password.to_owned();
    let hashed = tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
    Ok(hashed)
}

/// Verifica a senha contra o digest salvo.
///
/// Um digest que o bcrypt não consegue ler conta como senha errada, para que o
/// login nunca diferencie "e-mail inexistente" de "senha inválida".
pub async fn verify_password(password: &str, digest: &str) -> Result<bool, AppError> {
    let password_clone = password.to_owned();
    let digest_clone = digest.to_owned();

    let outcome = tokio::task::spawn_blocking(move || verify(&password_clone, &digest_clone))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))?;

    match outcome {
        Ok(valid) => Ok(valid),
        Err(e) => {
            tracing::warn!("Digest de senha ilegível no banco: {}", e);
            Ok(false)
        }
    }
}
