pub mod dto;
pub mod error;
pub mod models;

pub use dto::draft::{DraftField, DraftMember};
pub use error::{DraftError, Result};
pub use models::{BodyStyle, Gym, Member};
