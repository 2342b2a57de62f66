//! tcd-indices: hemodynamic indices from transcranial Doppler velocities.
//!
//! Given the peak-systolic (VPS) and end-diastolic (VFD) velocities for one
//! artery, derives mean velocity, pulsatility index, resistance index and,
//! for the middle cerebral arteries, the Lindegaard ratio, then labels the
//! result against the artery's reference values.
//!
//! The engine is a pure function: no state, no I/O, no logging.
//!
//! ```
//! use tcd_indices::{Lindegaard, Measurement, compute};
//! use tcd_reference::ReferenceCatalog;
//!
//! let catalog = ReferenceCatalog::builtin();
//! let m = Measurement::new("ACMd (Derecha)", 110.0, 40.0);
//! let result = compute(&m, &catalog).unwrap();
//!
//! assert_eq!(result.vm_cm_s, 136.67);
//! assert_eq!(result.lindegaard, Lindegaard::Ratio(4.56));
//! assert_eq!(result.status, "Suggests Vasospasm");
//! ```

pub mod classify;
pub mod engine;
pub mod measurement;
pub mod result;

pub use classify::{
    ELEVATED_VELOCITY, ELEVATED_VELOCITY_FACTOR, HIGH_PI_SUFFIX, LOW_VELOCITY,
    LOW_VELOCITY_FACTOR, NORMAL, SUGGESTS_VASOSPASM, classify,
};
pub use engine::{DerivedIndices, compute, derive_indices};
pub use measurement::{DEFAULT_VM_ACI_REF_CM_S, Measurement};
pub use result::{ComputedResult, Lindegaard};
