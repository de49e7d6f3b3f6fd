pub mod client;
pub mod config;
pub mod error;
pub mod traits;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{GatewayError, Result};
pub use traits::MemberGateway;
