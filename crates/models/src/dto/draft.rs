use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{DraftError, Result};
use crate::models::BodyStyle;

/// The seven fields of the add-member form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    TaxId,
    Name,
    Weight,
    Height,
    Age,
    BodyStyle,
    GymId,
}

impl DraftField {
    pub const ALL: [DraftField; 7] = [
        DraftField::TaxId,
        DraftField::Name,
        DraftField::Weight,
        DraftField::Height,
        DraftField::Age,
        DraftField::BodyStyle,
        DraftField::GymId,
    ];

    /// Key used in the backend JSON body.
    pub fn wire_name(&self) -> &'static str {
        match self {
            DraftField::TaxId => "cpf",
            DraftField::Name => "nome",
            DraftField::Weight => "peso",
            DraftField::Height => "altura",
            DraftField::Age => "idade",
            DraftField::BodyStyle => "estilo",
            DraftField::GymId => "academiaId",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::TaxId => "CPF",
            DraftField::Name => "Name",
            DraftField::Weight => "Weight",
            DraftField::Height => "Height",
            DraftField::Age => "Age",
            DraftField::BodyStyle => "Body style",
            DraftField::GymId => "Gym",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the backend key or the English name, ignoring case.
impl FromStr for DraftField {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        let field = match s.trim().to_lowercase().as_str() {
            "cpf" | "tax_id" | "taxid" => DraftField::TaxId,
            "nome" | "name" => DraftField::Name,
            "peso" | "weight" | "weight_kg" => DraftField::Weight,
            "altura" | "height" | "height_cm" => DraftField::Height,
            "idade" | "age" => DraftField::Age,
            "estilo" | "style" | "body_style" => DraftField::BodyStyle,
            "academiaid" | "academia" | "gym" | "gym_id" => DraftField::GymId,
            _ => return Err(DraftError::UnknownField(s.trim().to_string())),
        };
        Ok(field)
    }
}

/// In-progress member composed in the add form.
///
/// Values are kept exactly as typed; the only check applied before submission
/// is that every field is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DraftMember {
    #[serde(rename = "cpf")]
    #[validate(length(min = 1, message = "CPF is required"))]
    tax_id: String,

    #[serde(rename = "nome")]
    #[validate(length(min = 1, message = "Name is required"))]
    name: String,

    #[serde(rename = "peso")]
    #[validate(length(min = 1, message = "Weight is required"))]
    weight: String,

    #[serde(rename = "altura")]
    #[validate(length(min = 1, message = "Height is required"))]
    height: String,

    #[serde(rename = "idade")]
    #[validate(length(min = 1, message = "Age is required"))]
    age: String,

    #[serde(rename = "estilo")]
    #[validate(length(min = 1, message = "Body style is required"))]
    body_style: String,

    #[serde(rename = "academiaId")]
    #[validate(length(min = 1, message = "Gym is required"))]
    gym_id: String,
}

impl DraftMember {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::TaxId => &self.tax_id,
            DraftField::Name => &self.name,
            DraftField::Weight => &self.weight,
            DraftField::Height => &self.height,
            DraftField::Age => &self.age,
            DraftField::BodyStyle => &self.body_style,
            DraftField::GymId => &self.gym_id,
        }
    }

    /// Replaces exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::TaxId => &mut self.tax_id,
            DraftField::Name => &mut self.name,
            DraftField::Weight => &mut self.weight,
            DraftField::Height => &mut self.height,
            DraftField::Age => &mut self.age,
            DraftField::BodyStyle => &mut self.body_style,
            DraftField::GymId => &mut self.gym_id,
        };
        *slot = value.into();
    }

    pub fn set_tax_id(&mut self, value: impl Into<String>) {
        self.set(DraftField::TaxId, value);
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.set(DraftField::Name, value);
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.set(DraftField::Weight, value);
    }

    pub fn set_height(&mut self, value: impl Into<String>) {
        self.set(DraftField::Height, value);
    }

    pub fn set_age(&mut self, value: impl Into<String>) {
        self.set(DraftField::Age, value);
    }

    pub fn set_body_style(&mut self, style: BodyStyle) {
        self.set(DraftField::BodyStyle, style.id().to_string());
    }

    pub fn set_gym_id(&mut self, value: impl Into<String>) {
        self.set(DraftField::GymId, value);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }

    /// Fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Presence check run before the draft may be sent.
    pub fn check_presence(&self) -> Result<()> {
        self.validate()
            .map_err(|_| DraftError::MissingFields(self.missing_fields()))
    }
}
