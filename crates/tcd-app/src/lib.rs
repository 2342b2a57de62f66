//! Shared application service layer for the TCD indices tools.
//!
//! Front ends own a [`Session`] (reference catalog plus report), feed it
//! measurements and render or export what it holds. Nothing here is global:
//! two sessions never share a report.

pub mod batch;
pub mod error;
pub mod session;
pub mod view;

// Re-export key types for convenience
pub use batch::{MeasurementBatch, MeasurementEntry, load_batch};
pub use error::{AppError, AppResult};
pub use session::{Session, load_reference_catalog};
pub use view::{
    EMPTY_REPORT_HINT, render_artery_list, render_index_notes, render_references,
    render_report_table, render_vm_chart,
};
