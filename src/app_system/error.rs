use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::session::SessionError;

/// Errors that stop the application from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("session error: {0}")]
    Session(#[from] SessionError),
    #[error("API client error: {0}")]
    Api(#[from] ApiError),
}
