use std::fmt;
use std::str::FromStr;

use crate::error::DraftError;

/// Body style category offered by the add-member form.
///
/// Ids the form does not know are kept as `Other` so records created by newer
/// clients still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyStyle {
    Monstrao,
    Frango,
    ChassiDeGrilo,
    Esqueletico,
    Other(u32),
}

impl BodyStyle {
    pub const ALL: [BodyStyle; 4] = [
        BodyStyle::Monstrao,
        BodyStyle::Frango,
        BodyStyle::ChassiDeGrilo,
        BodyStyle::Esqueletico,
    ];

    pub fn from_id(id: u32) -> Self {
        match id {
            1 => BodyStyle::Monstrao,
            2 => BodyStyle::Frango,
            3 => BodyStyle::ChassiDeGrilo,
            4 => BodyStyle::Esqueletico,
            other => BodyStyle::Other(other),
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            BodyStyle::Monstrao => 1,
            BodyStyle::Frango => 2,
            BodyStyle::ChassiDeGrilo => 3,
            BodyStyle::Esqueletico => 4,
            BodyStyle::Other(id) => *id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodyStyle::Monstrao => "Monstrão",
            BodyStyle::Frango => "Frango",
            BodyStyle::ChassiDeGrilo => "Chassi de Grilo",
            BodyStyle::Esqueletico => "Esquelético",
            BodyStyle::Other(_) => "Unknown",
        }
    }
}

impl fmt::Display for BodyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyStyle::Other(id) => write!(f, "Unknown ({})", id),
            known => f.write_str(known.label()),
        }
    }
}

/// Parses either the numeric id or a label, ignoring case.
impl FromStr for BodyStyle {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u32>() {
            return Ok(BodyStyle::from_id(id));
        }

        let lowered = trimmed.to_lowercase();
        BodyStyle::ALL
            .into_iter()
            .find(|style| style.label().to_lowercase() == lowered)
            .ok_or_else(|| DraftError::UnknownBodyStyle(trimmed.to_string()))
    }
}
