// src/common/de.rs

use serde::{Deserialize, Deserializer};

// O cliente web envia números vindos de <input>, às vezes como texto ("12").
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

/// Aceita `12`, `"12"`, `null` ou campo ausente (com `#[serde(default)]`).
/// Texto vazio ou não numérico vira `None`, para cair na validação de obrigatório.
pub fn optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrString::Number(n)) => i32::try_from(n).ok(),
        Some(NumberOrString::Text(s)) => s.trim().parse::<i32>().ok(),
        None => None,
    })
}

/// Para parâmetros de query string (`?user_id=7`): vazio ou inválido vira `None`.
pub fn parse_optional_i32(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "optional_i32")]
        bloco: Option<i32>,
    }

    fn bloco(value: serde_json::Value) -> Option<i32> {
        serde_json::from_value::<Payload>(value).unwrap().bloco
    }

    #[test]
    fn accepts_numbers_and_numeric_text() {
        assert_eq!(bloco(json!({ "bloco": 3 })), Some(3));
        assert_eq!(bloco(json!({ "bloco": " 12 " })), Some(12));
    }

    #[test]
    fn missing_blank_or_garbage_is_none() {
        assert_eq!(bloco(json!({})), None);
        assert_eq!(bloco(json!({ "bloco": null })), None);
        assert_eq!(bloco(json!({ "bloco": "" })), None);
        assert_eq!(bloco(json!({ "bloco": "abc" })), None);
    }

    #[test]
    fn query_values_are_parsed_leniently() {
        assert_eq!(parse_optional_i32(Some("5")), Some(5));
        assert_eq!(parse_optional_i32(Some("x")), None);
        assert_eq!(parse_optional_i32(None), None);
    }
}
