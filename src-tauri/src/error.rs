//! Crate-wide error type.
//!
//! Every layer returns `crate::error::Result<T>`. IPC command handlers convert
//! to `String` at the boundary; nothing below `commands` knows about Tauri.

use thiserror::Error;

/// Reasons a selection or form is refused before any network call.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select files to upload")]
    EmptySelection,
    #[error("Please select a maximum of 2 files")]
    TooManyFiles,
    #[error("Please select both AAR and POM files")]
    MissingRequiredTypes,
    #[error("Project ID, version, and deploy token are required")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Api(format!("Malformed response body: {}", e))
        } else {
            AppError::Network(e.to_string())
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
