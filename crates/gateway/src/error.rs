use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The server answered with a non-success status.
    #[error("Server responded with {status}: {message}")]
    Server { status: u16, message: String },

    /// The request went out but no response came back in time.
    #[error("The server did not respond: {message}")]
    Network { message: String },

    /// The request could not be built or sent.
    #[error("Request could not be sent: {message}")]
    Request { message: String },

    #[error("Invalid response body: {message}")]
    InvalidResponse { message: String },
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        let message = error.to_string();

        if error.is_builder() {
            GatewayError::Request { message }
        } else if error.is_timeout() || error.is_connect() || error.is_request() {
            GatewayError::Network { message }
        } else if error.is_decode() || error.is_body() {
            GatewayError::InvalidResponse { message }
        } else if let Some(status) = error.status() {
            GatewayError::Server {
                status: status.as_u16(),
                message,
            }
        } else {
            GatewayError::Request { message }
        }
    }
}

impl GatewayError {
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, GatewayError::Network { .. })
    }
}
