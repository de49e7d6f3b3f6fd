use thiserror::Error;

use crate::dto::draft::DraftField;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Missing required fields: {}", field_labels(.0))]
    MissingFields(Vec<DraftField>),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown body style: {0}")]
    UnknownBodyStyle(String),
}

pub type Result<T> = std::result::Result<T, DraftError>;

fn field_labels(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

impl DraftError {
    pub fn missing_fields(&self) -> &[DraftField] {
        match self {
            DraftError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}
