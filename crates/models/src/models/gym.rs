use serde::{Deserialize, Serialize};

use super::lenient;

/// Gym (academia) reference data used to fill the gym selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gym {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
}
