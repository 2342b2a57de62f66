//! tcd-report: per-session collection of computed results and its exports.

pub mod export;
pub mod report;

pub use export::{COLUMNS, ReportExport, to_csv, write_csv, write_json};
pub use report::Report;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report is empty; nothing to export")]
    Empty,
}
