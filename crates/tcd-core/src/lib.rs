//! tcd-core: shared foundation for the transcranial Doppler indices workspace.
//!
//! Contains:
//! - numeric (Real + float guards + display rounding)
//! - error (the validation error shared by catalog and engine)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TcdResult, ValidationError};
pub use numeric::*;
