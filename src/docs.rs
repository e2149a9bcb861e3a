// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Blocks ---
        handlers::blocks::list_blocks,

        // --- Users ---
        handlers::users::list_users,
        handlers::users::update_role,
        handlers::users::delete_user,

        // --- Complaints ---
        handlers::complaints::create_complaint,
        handlers::complaints::list_complaints,
        handlers::complaints::update_complaint,
    ),
    components(
        schemas(
            models::MessageResponse,

            // --- Blocks ---
            models::block::Block,

            // --- Residents ---
            models::resident::Role,
            models::resident::ResidentListing,
            models::resident::RegisterResidentPayload,
            models::resident::LoginPayload,
            models::resident::LoginResponse,
            models::resident::UpdateRolePayload,

            // --- Complaints ---
            models::complaint::ComplaintListing,
            models::complaint::CreateComplaintPayload,
            models::complaint::UpdateComplaintPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Registro e Login de Moradores"),
        (name = "Blocks", description = "Blocos do Condomínio"),
        (name = "Users", description = "Administração de Moradores (roles e exclusão)"),
        (name = "Complaints", description = "Reclamações dos Moradores")
    )
)]
pub struct ApiDoc;
