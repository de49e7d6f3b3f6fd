//! Deserializers for backends that echo form values back as typed.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl RawScalar {
    fn into_text(self) -> String {
        match self {
            RawScalar::Unsigned(n) => n.to_string(),
            RawScalar::Signed(n) => n.to_string(),
            RawScalar::Float(n) => n.to_string(),
            RawScalar::Bool(b) => b.to_string(),
            RawScalar::Text(s) => s,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Scalar(RawScalar),
    Other(IgnoredAny),
}

/// Accepts a JSON string or number and keeps it as text.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawScalar::deserialize(deserializer)?.into_text())
}

/// Keeps any scalar as text; `null`, arrays and objects become `None`.
pub(crate) fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawField>::deserialize(deserializer)? {
        Some(RawField::Scalar(scalar)) => Ok(Some(scalar.into_text())),
        Some(RawField::Other(_)) | None => Ok(None),
    }
}
