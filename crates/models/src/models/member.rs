use serde::{Deserialize, Serialize};

use super::{BodyStyle, lenient};

/// A gym member (cliente) as stored by the backend.
///
/// Only the identifying fields are required. Measurements are kept exactly as
/// the backend returns them, since the form accepts free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "cpf", deserialize_with = "lenient::string")]
    pub tax_id: String,
    #[serde(rename = "nome", deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(
        rename = "peso",
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<String>,
    #[serde(
        rename = "altura",
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<String>,
    #[serde(
        rename = "idade",
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<String>,
    /// Raw body style id; see [`Member::body_style`].
    #[serde(
        rename = "estilo",
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub style: Option<String>,
    #[serde(rename = "academiaId", deserialize_with = "lenient::string")]
    pub gym_id: String,
    /// Gym display name, when the backend joins it in.
    #[serde(
        rename = "academia",
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub gym: Option<String>,
}

impl Member {
    /// Case-insensitive substring match on the member name.
    /// `needle_lower` must already be lowercased.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }

    pub fn body_style(&self) -> Option<BodyStyle> {
        self.style.as_deref()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_numeric_payload() {
        let member: Member = serde_json::from_value(json!({
            "cpf": "111",
            "nome": "Ana",
            "peso": 70,
            "altura": 170,
            "idade": 30,
            "estilo": 1,
            "academiaId": "g1"
        }))
        .unwrap();

        assert_eq!(member.tax_id, "111");
        assert_eq!(member.weight.as_deref(), Some("70"));
        assert_eq!(member.height.as_deref(), Some("170"));
        assert_eq!(member.age.as_deref(), Some("30"));
        assert_eq!(member.body_style(), Some(BodyStyle::Monstrao));
        assert_eq!(member.gym, None);
    }

    #[test]
    fn test_deserialize_echoed_form_strings() {
        let member: Member = serde_json::from_value(json!({
            "cpf": 12345678900u64,
            "nome": "Bruno",
            "peso": "82.5",
            "altura": "1,80",
            "idade": "vinte e sete",
            "estilo": "3",
            "academiaId": 7,
            "academia": "Iron Temple"
        }))
        .unwrap();

        assert_eq!(member.tax_id, "12345678900");
        assert_eq!(member.weight.as_deref(), Some("82.5"));
        assert_eq!(member.height.as_deref(), Some("1,80"));
        assert_eq!(member.age.as_deref(), Some("vinte e sete"));
        assert_eq!(member.body_style(), Some(BodyStyle::ChassiDeGrilo));
        assert_eq!(member.gym_id, "7");
        assert_eq!(member.gym.as_deref(), Some("Iron Temple"));
    }

    #[test]
    fn test_optional_fields_tolerate_missing_null_and_nested() {
        let member: Member = serde_json::from_value(json!({
            "cpf": "1",
            "nome": "Caio",
            "peso": null,
            "estilo": { "id": 4 },
            "academiaId": "g2"
        }))
        .unwrap();

        assert_eq!(member.weight, None);
        assert_eq!(member.height, None);
        assert_eq!(member.age, None);
        assert_eq!(member.style, None);
        assert_eq!(member.body_style(), None);
    }

    #[test]
    fn test_unparseable_style_has_no_body_style() {
        let member: Member = serde_json::from_value(json!({
            "cpf": "1", "nome": "Caio", "estilo": "grande", "academiaId": "g2"
        }))
        .unwrap();

        assert_eq!(member.style.as_deref(), Some("grande"));
        assert_eq!(member.body_style(), None);
    }

    #[test]
    fn test_name_is_required() {
        let result = serde_json::from_value::<Member>(json!({
            "cpf": "1", "peso": 90, "academiaId": "g2"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_name_contains_ignores_case() {
        let member: Member = serde_json::from_value(json!({
            "cpf": "1", "nome": "Ana Paula", "academiaId": "g1"
        }))
        .unwrap();

        assert!(member.name_contains("paula"));
        assert!(member.name_contains(""));
        assert!(!member.name_contains("zz"));
    }
}
