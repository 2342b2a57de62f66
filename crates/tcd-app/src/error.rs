//! Error types for the tcd-app service layer.

use std::path::PathBuf;

use tcd_core::ValidationError;

/// Application error type that wraps errors from the backend crates and
/// provides one error interface for every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid measurement: {0}")]
    Validation(#[from] ValidationError),

    #[error("Reference catalog error: {0}")]
    Catalog(String),

    #[error("Failed to read measurement file: {path}")]
    BatchFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Measurement file error: {0}")]
    Batch(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tcd-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<tcd_reference::CatalogError> for AppError {
    fn from(err: tcd_reference::CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<tcd_report::ReportError> for AppError {
    fn from(err: tcd_report::ReportError) -> Self {
        AppError::Report(err.to_string())
    }
}
