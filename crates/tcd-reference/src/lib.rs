//! tcd-reference: clinical reference data for transcranial Doppler.
//!
//! Provides:
//! - Artery reference records (expected VPS/VFD/Vm per vessel segment)
//! - The built-in nine-entry adult catalog and exact-match lookup
//! - Normality ranges for PI, RI and the Lindegaard ratio
//! - Loading an alternative catalog from YAML or JSON
//!
//! # Example
//!
//! ```
//! use tcd_reference::{ArteryGroup, ReferenceCatalog};
//!
//! let catalog = ReferenceCatalog::builtin();
//! let mca = catalog.lookup("ACMd (Derecha)").unwrap();
//! assert_eq!(mca.group, ArteryGroup::Mca);
//! assert_eq!(mca.vps_cm_s, 110.0);
//! ```

pub mod artery;
pub mod catalog;
pub mod error;
pub mod load;
pub mod norms;

pub use artery::{ArteryGroup, ArteryReference, Side};
pub use catalog::ReferenceCatalog;
pub use error::{CatalogError, CatalogResult};
pub use load::{CatalogFile, load_catalog, save_catalog};
pub use norms::{
    IndexRange, LINDEGAARD_NORMAL_UPPER, LINDEGAARD_SEVERE_LOWER, LindegaardGrade, PI_NORMAL,
    RI_NORMAL,
};
