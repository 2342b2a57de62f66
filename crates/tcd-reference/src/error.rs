//! Catalog loading and validation errors.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported catalog file extension: '{extension}' (expected yaml, yml or json)")]
    UnsupportedFormat { extension: String },

    #[error("Catalog has no arteries")]
    Empty,

    #[error("Duplicate artery identifier or alias: '{id}'")]
    DuplicateId { id: String },

    #[error("Invalid reference value: {artery}.{field} = {value} ({reason})")]
    InvalidValue {
        artery: String,
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Artery identifier must not be blank")]
    BlankId,
}
