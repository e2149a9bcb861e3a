// src/models/complaint.rs

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::de::optional_i32;

/// Status inicial de toda reclamação. Os demais são texto livre definido pelo admin.
pub const INITIAL_STATUS: &str = "aberto";

// Linha da listagem GET /api/complaints (reclamação + dados do autor)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ComplaintListing {
    #[schema(example = 10)]
    pub id: i32,
    #[schema(example = "Vazamento na garagem")]
    pub subject: String,
    pub description: String,
    /// No fuso configurado (`APP_TIMEZONE`), com o deslocamento explícito.
    #[schema(value_type = String, example = "2024-06-01T14:30:00-03:00")]
    pub date: DateTime<FixedOffset>,
    #[schema(example = "aberto")]
    pub status: String,
    pub admin_comment: Option<String>,
    pub user_name: String,
    pub user_email: String,
    #[schema(example = 3)]
    pub user_bloco: i32,
    #[schema(example = 42)]
    pub user_apartment: i32,
}

// Como vem do banco: instante em UTC + deslocamento do fuso configurado naquele instante
#[derive(Debug, Clone, FromRow)]
pub struct ComplaintRow {
    pub id: i32,
    pub subject: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub utc_offset_secs: i32,
    pub status: String,
    pub admin_comment: Option<String>,
    pub user_name: String,
    pub user_email: String,
    pub user_bloco: i32,
    pub user_apartment: i32,
}

impl From<ComplaintRow> for ComplaintListing {
    fn from(row: ComplaintRow) -> Self {
        let offset = FixedOffset::east_opt(row.utc_offset_secs).unwrap_or_else(|| Utc.fix());
        Self {
            id: row.id,
            subject: row.subject,
            description: row.description,
            date: row.date.with_timezone(&offset),
            status: row.status,
            admin_comment: row.admin_comment,
            user_name: row.user_name,
            user_email: row.user_email,
            user_bloco: row.user_bloco,
            user_apartment: row.user_apartment,
        }
    }
}

// Reclamação alvo de atualização: só o que a regra de escopo precisa
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct ComplaintTarget {
    pub id: i32,
    pub block_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateComplaintPayload {
    #[serde(default, deserialize_with = "optional_i32")]
    #[validate(required(message = "O user_id é obrigatório."))]
    #[schema(value_type = i32, example = 17)]
    pub user_id: Option<i32>,

    #[serde(default)]
    #[validate(length(min = 1, message = "O assunto é obrigatório."))]
    #[schema(example = "Vazamento na garagem")]
    pub subject: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateComplaintPayload {
    #[serde(default)]
    #[schema(example = "em andamento")]
    pub status: Option<String>,
    #[serde(default)]
    pub admin_comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complaint_payload_rejects_blank_fields() {
        let payload: CreateComplaintPayload =
            serde_json::from_value(json!({ "user_id": "7", "subject": "" })).unwrap();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("subject"));
        assert!(fields.contains_key("description"));
        assert!(!fields.contains_key("user_id"));
    }

    fn row(date: DateTime<Utc>, utc_offset_secs: i32) -> ComplaintRow {
        ComplaintRow {
            id: 1,
            subject: "Portão".into(),
            description: "Não fecha".into(),
            date,
            utc_offset_secs,
            status: INITIAL_STATUS.into(),
            admin_comment: None,
            user_name: "Ana".into(),
            user_email: "ana@example.com".into(),
            user_bloco: 3,
            user_apartment: 42,
        }
    }

    #[test]
    fn listing_date_carries_the_configured_offset() {
        let instant = DateTime::parse_from_rfc3339("2024-06-01T17:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let listing = ComplaintListing::from(row(instant, -3 * 3600));

        let body = serde_json::to_value(&listing).unwrap();
        assert_eq!(body["date"], "2024-06-01T14:30:00-03:00");
        // Mesmo instante, só a representação muda
        assert_eq!(listing.date.with_timezone(&Utc), instant);
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let instant = DateTime::parse_from_rfc3339("2024-06-01T17:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let listing = ComplaintListing::from(row(instant, 999_999));
        assert_eq!(listing.date.offset().local_minus_utc(), 0);
    }

    #[test]
    fn update_payload_tolerates_missing_comment() {
        let payload: UpdateComplaintPayload =
            serde_json::from_value(json!({ "status": "resolvido" })).unwrap();
        assert_eq!(payload.status.as_deref(), Some("resolvido"));
        assert!(payload.admin_comment.is_none());
    }
}
