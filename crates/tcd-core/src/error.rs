use thiserror::Error;

pub type TcdResult<T> = Result<T, ValidationError>;

/// Input rejected before any index is derived.
///
/// This is the only failure the indices engine reports. Every variant is a
/// deterministic input problem, so callers surface it and never retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unknown artery: '{id}'")]
    UnknownArtery { id: String },

    #[error("Negative velocity for {what}: {value} cm/s")]
    NegativeVelocity { what: &'static str, value: f64 },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Reference ICA mean velocity must be positive, got {value} cm/s")]
    InvalidReferenceVelocity { value: f64 },
}
