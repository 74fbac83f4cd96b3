//! Error types for the library admin console

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status; `body` is the server's text, shown as-is
    #[error("Server responded with {status}: {body}")]
    Server { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AppError {
    /// Text presented to the administrator.
    ///
    /// Server failures carry an opaque body that is displayed verbatim; no
    /// error codes are parsed out of it.
    pub fn display_text(&self) -> String {
        match self {
            AppError::Server { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
