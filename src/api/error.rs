use thiserror::Error;

/// Errors returned by calls to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not authenticated")]
    Unauthorized,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether retrying the same call later could succeed without the user
    /// doing anything.
    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::Unauthorized)
    }
}
