// src/services/policy.rs
//
// Regras de autorização para as mutações. Funções puras: recebem quem chama
// e o alvo já carregados (`None` quando não existem) e decidem. Um requisitante
// inexistente numa mutação conta como sem permissão (403).
// Nenhuma escrita acontece antes de uma destas funções responder `Ok`.

use crate::{
    common::error::AppError,
    models::{
        complaint::ComplaintTarget,
        resident::{Caller, ResidentTarget, Role},
    },
};

/// Troca de role. A role pedida é validada antes de olhar quem chama: só o
/// síndico, só para `morador`/`admin_bloco`, nunca a própria.
/// Devolve a role já validada.
pub fn authorize_role_update(
    caller: Option<&Caller>,
    target_id: i32,
    target: Option<&ResidentTarget>,
    new_role: Option<&str>,
) -> Result<Role, AppError> {
    let raw = new_role.map(str::trim).unwrap_or_default();
    let role = match raw.parse::<Role>() {
        Ok(role @ (Role::Morador | Role::AdminBloco)) => role,
        Ok(Role::Sindico) | Err(_) => return Err(AppError::InvalidRole(raw.to_string())),
    };

    // Requisitante inexistente é tratado como sem permissão
    let caller = caller
        .filter(|c| c.role == Role::Sindico)
        .ok_or(AppError::RoleChangeForbidden)?;

    let target = target.ok_or(AppError::ResidentNotFound(target_id))?;
    if target.id == caller.id {
        return Err(AppError::SelfRoleChange);
    }

    Ok(role)
}

/// Exclusão de morador.
pub fn authorize_resident_deletion(
    caller_id: i32,
    caller: Option<&Caller>,
    target_id: i32,
    target: Option<&ResidentTarget>,
) -> Result<(), AppError> {
    if target_id == caller_id {
        return Err(AppError::SelfDeletion);
    }

    let caller = caller
        .filter(|c| c.role.is_admin())
        .ok_or(AppError::DeletionForbidden)?;

    let target = target.ok_or(AppError::ResidentNotFound(target_id))?;

    match target.role {
        Role::Sindico => return Err(AppError::SindicoUndeletable),
        Role::AdminBloco | Role::Morador => {}
    }

    match caller.role {
        Role::AdminBloco if target.block_id != caller.block_id => {
            Err(AppError::ResidentOutsideBlock)
        }
        _ => Ok(()),
    }
}

/// Atualização de status/comentário de reclamação. Devolve o status validado.
pub fn authorize_complaint_update<'a>(
    caller: Option<&Caller>,
    complaint_id: i32,
    complaint: Option<&ComplaintTarget>,
    new_status: Option<&'a str>,
) -> Result<&'a str, AppError> {
    let caller = caller
        .filter(|c| c.role.is_admin())
        .ok_or(AppError::ComplaintUpdateForbidden)?;

    let status = new_status
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingStatus)?;

    let complaint = complaint.ok_or(AppError::ComplaintNotFound(complaint_id))?;

    match caller.role {
        Role::AdminBloco if complaint.block_id != caller.block_id => {
            Err(AppError::ComplaintOutsideBlock)
        }
        _ => Ok(status),
    }
}
