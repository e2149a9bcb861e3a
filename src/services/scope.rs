// src/services/scope.rs

use sqlx::{Postgres, QueryBuilder};

use crate::{
    common::error::AppError,
    models::resident::{Caller, Role},
};

const RESIDENT_LISTING_SELECT: &str = r#"
    SELECT m.morador_id AS id, m.nome, m.email, m.role,
           b.numero_bloco AS bloco, a.numero_apartamento AS apartment
    FROM moradores m
    JOIN apartamentos a ON m.apartamento_id = a.apartamento_id
    JOIN blocos b ON a.bloco_id = b.bloco_id"#;

// O fuso entra como bind entre as duas partes do SELECT
const COMPLAINT_LISTING_SELECT: &str = r#"
    SELECT c.id, c.subject, c.description, c.date, c.status, c.admin_comment,
           m.nome AS user_name, m.email AS user_email,
           b.numero_bloco AS user_bloco, a.numero_apartamento AS user_apartment,
           EXTRACT(EPOCH FROM (c.date AT TIME ZONE "#;

const COMPLAINT_LISTING_FROM: &str = r#") - (c.date AT TIME ZONE 'UTC'))::int AS utc_offset_secs
    FROM complaints c
    JOIN moradores m ON c.user_id = m.morador_id
    JOIN apartamentos a ON m.apartamento_id = a.apartamento_id
    JOIN blocos b ON a.bloco_id = b.bloco_id"#;

/// Quais moradores quem chama pode ver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidentScope {
    /// Síndico: todos, ou só o bloco pedido em `bloco_id_filter`.
    Complex { block_filter: Option<i32> },
    /// Admin de bloco: sempre o próprio bloco, qualquer filtro é ignorado.
    Block { block_id: i32 },
}

impl ResidentScope {
    pub fn for_caller(caller: &Caller, block_filter: Option<i32>) -> Result<Self, AppError> {
        match caller.role {
            Role::Sindico => Ok(ResidentScope::Complex { block_filter }),
            Role::AdminBloco => Ok(ResidentScope::Block {
                block_id: caller.block_id,
            }),
            Role::Morador => Err(AppError::ResidentListingForbidden),
        }
    }

    /// SELECT completo com o predicado de visibilidade e a ordenação (bloco, apartamento).
    pub fn listing_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(RESIDENT_LISTING_SELECT);

        match *self {
            ResidentScope::Complex {
                block_filter: Some(block_id),
            }
            | ResidentScope::Block { block_id } => {
                query.push(" WHERE b.bloco_id = ").push_bind(block_id);
            }
            ResidentScope::Complex { block_filter: None } => {}
        }

        query.push(" ORDER BY b.numero_bloco, a.numero_apartamento");
        query
    }
}

/// Quais reclamações quem chama pode ver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintScope {
    Complex,
    /// Reclamações de autores que moram no bloco.
    Block { block_id: i32 },
    /// Só as do próprio morador.
    Author { resident_id: i32 },
}

impl ComplaintScope {
    pub fn for_caller(caller: &Caller) -> Self {
        match caller.role {
            Role::Sindico => ComplaintScope::Complex,
            Role::AdminBloco => ComplaintScope::Block {
                block_id: caller.block_id,
            },
            Role::Morador => ComplaintScope::Author {
                resident_id: caller.id,
            },
        }
    }

    /// Mais novas primeiro; o id desempata reclamações com a mesma data.
    /// `timezone` define o deslocamento devolvido junto de cada data.
    pub fn listing_query(&self, timezone: &str) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(COMPLAINT_LISTING_SELECT);
        query
            .push_bind(timezone.to_string())
            .push(COMPLAINT_LISTING_FROM);

        match *self {
            ComplaintScope::Complex => {}
            ComplaintScope::Block { block_id } => {
                query.push(" WHERE b.bloco_id = ").push_bind(block_id);
            }
            ComplaintScope::Author { resident_id } => {
                query.push(" WHERE c.user_id = ").push_bind(resident_id);
            }
        }

        query.push(" ORDER BY c.date DESC, c.id DESC");
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(role: Role, block_id: i32) -> Caller {
        Caller {
            id: 7,
            role,
            block_id,
        }
    }

    #[test]
    fn sindico_sees_everyone_or_the_requested_block() {
        let sindico = caller(Role::Sindico, 1);

        let all = ResidentScope::for_caller(&sindico, None).unwrap();
        assert_eq!(all, ResidentScope::Complex { block_filter: None });
        assert!(!all.listing_query().sql().contains("WHERE"));

        let filtered = ResidentScope::for_caller(&sindico, Some(9)).unwrap();
        assert_eq!(filtered, ResidentScope::Complex { block_filter: Some(9) });
        assert!(filtered.listing_query().sql().contains("WHERE b.bloco_id = $1"));
    }

    #[test]
    fn admin_bloco_is_pinned_to_own_block_whatever_the_filter() {
        let admin = caller(Role::AdminBloco, 5);

        assert_eq!(
            ResidentScope::for_caller(&admin, Some(3)).unwrap(),
            ResidentScope::Block { block_id: 5 }
        );
        assert_eq!(
            ResidentScope::for_caller(&admin, None).unwrap(),
            ResidentScope::Block { block_id: 5 }
        );
    }

    #[test]
    fn morador_cannot_list_residents() {
        let result = ResidentScope::for_caller(&caller(Role::Morador, 3), None);
        assert!(matches!(result, Err(AppError::ResidentListingForbidden)));
    }

    #[test]
    fn resident_listing_is_ordered_by_block_then_apartment() {
        let query = ResidentScope::Block { block_id: 2 }.listing_query();
        let sql = query.sql();
        assert!(sql.trim_end().ends_with("ORDER BY b.numero_bloco, a.numero_apartamento"));
        assert!(sql.find("WHERE").unwrap() < sql.find("ORDER BY").unwrap());
    }

    #[test]
    fn complaint_scope_follows_the_role() {
        assert_eq!(
            ComplaintScope::for_caller(&caller(Role::Sindico, 1)),
            ComplaintScope::Complex
        );
        assert_eq!(
            ComplaintScope::for_caller(&caller(Role::AdminBloco, 3)),
            ComplaintScope::Block { block_id: 3 }
        );
        assert_eq!(
            ComplaintScope::for_caller(&caller(Role::Morador, 3)),
            ComplaintScope::Author { resident_id: 7 }
        );
    }

    #[test]
    fn complaint_predicates_and_ordering() {
        const TZ: &str = "America/Sao_Paulo";

        assert!(!ComplaintScope::Complex.listing_query(TZ).sql().contains("WHERE"));
        assert!(ComplaintScope::Block { block_id: 3 }
            .listing_query(TZ)
            .sql()
            .contains("WHERE b.bloco_id = $2"));
        assert!(ComplaintScope::Author { resident_id: 7 }
            .listing_query(TZ)
            .sql()
            .contains("WHERE c.user_id = $2"));
        assert!(ComplaintScope::Complex
            .listing_query(TZ)
            .sql()
            .ends_with("ORDER BY c.date DESC, c.id DESC"));
    }

    #[test]
    fn complaint_listing_binds_the_timezone_first() {
        let query = ComplaintScope::Complex.listing_query("UTC");
        let sql = query.sql();
        assert!(sql.contains("c.date AT TIME ZONE $1"));
        assert!(sql.contains("AS utc_offset_secs"));
    }
}
