//! Errors raised at the REST boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Transport and HTTP status failures, as opposed to decode or setup errors.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Status(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => ApiError::Status(status.as_u16()),
            None => ApiError::Network(e.to_string()),
        }
    }
}
