use std::collections::HashSet;

use tcd_core::{TcdResult, ValidationError};

use crate::artery::{ArteryGroup, ArteryReference, Side};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy)]
struct BuiltinEntry {
    id: &'static str,
    display_name: &'static str,
    group: ArteryGroup,
    side: Option<Side>,
    aliases: &'static [&'static str],
    vps_cm_s: f64,
    vfd_cm_s: f64,
    vm_cm_s: f64,
}

// Adult averages (Aaslid, Ringelstein et al.).
const ADULT_REFERENCE_CATALOG: [BuiltinEntry; 9] = [
    BuiltinEntry {
        id: "ACMd (Derecha)",
        display_name: "Right middle cerebral artery",
        group: ArteryGroup::Mca,
        side: Some(Side::Right),
        aliases: &["R-MCA", "right mca"],
        vps_cm_s: 110.0,
        vfd_cm_s: 40.0,
        vm_cm_s: 62.0,
    },
    BuiltinEntry {
        id: "ACMi (Izquierda)",
        display_name: "Left middle cerebral artery",
        group: ArteryGroup::Mca,
        side: Some(Side::Left),
        aliases: &["L-MCA", "left mca"],
        vps_cm_s: 110.0,
        vfd_cm_s: 40.0,
        vm_cm_s: 62.0,
    },
    BuiltinEntry {
        id: "ACAd (Derecha)",
        display_name: "Right anterior cerebral artery",
        group: ArteryGroup::Aca,
        side: Some(Side::Right),
        aliases: &["R-ACA", "right aca"],
        vps_cm_s: 90.0,
        vfd_cm_s: 35.0,
        vm_cm_s: 50.0,
    },
    BuiltinEntry {
        id: "ACAi (Izquierda)",
        display_name: "Left anterior cerebral artery",
        group: ArteryGroup::Aca,
        side: Some(Side::Left),
        aliases: &["L-ACA", "left aca"],
        vps_cm_s: 90.0,
        vfd_cm_s: 35.0,
        vm_cm_s: 50.0,
    },
    BuiltinEntry {
        id: "ACPd (Derecha)",
        display_name: "Right posterior cerebral artery",
        group: ArteryGroup::Pca,
        side: Some(Side::Right),
        aliases: &["R-PCA", "right pca"],
        vps_cm_s: 70.0,
        vfd_cm_s: 25.0,
        vm_cm_s: 40.0,
    },
    BuiltinEntry {
        id: "ACPi (Izquierda)",
        display_name: "Left posterior cerebral artery",
        group: ArteryGroup::Pca,
        side: Some(Side::Left),
        aliases: &["L-PCA", "left pca"],
        vps_cm_s: 70.0,
        vfd_cm_s: 25.0,
        vm_cm_s: 40.0,
    },
    BuiltinEntry {
        id: "Basilar",
        display_name: "Basilar artery",
        group: ArteryGroup::Basilar,
        side: None,
        aliases: &["BA"],
        vps_cm_s: 70.0,
        vfd_cm_s: 25.0,
        vm_cm_s: 40.0,
    },
    BuiltinEntry {
        id: "ACId (Sifón/Extracraneal)",
        display_name: "Right internal carotid artery (siphon/extracranial)",
        group: ArteryGroup::Ica,
        side: Some(Side::Right),
        aliases: &["R-ICA", "right ica"],
        vps_cm_s: 80.0,
        vfd_cm_s: 30.0,
        vm_cm_s: 45.0,
    },
    BuiltinEntry {
        id: "ACIi (Sifón/Extracraneal)",
        display_name: "Left internal carotid artery (siphon/extracranial)",
        group: ArteryGroup::Ica,
        side: Some(Side::Left),
        aliases: &["L-ICA", "left ica"],
        vps_cm_s: 80.0,
        vfd_cm_s: 30.0,
        vm_cm_s: 45.0,
    },
];

impl From<&BuiltinEntry> for ArteryReference {
    fn from(entry: &BuiltinEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            display_name: entry.display_name.to_string(),
            group: entry.group,
            side: entry.side,
            aliases: entry.aliases.iter().map(|a| a.to_string()).collect(),
            vps_cm_s: entry.vps_cm_s,
            vfd_cm_s: entry.vfd_cm_s,
            vm_cm_s: entry.vm_cm_s,
        }
    }
}

/// Immutable, ordered set of artery references.
///
/// Built once at start-up (built-in table or a validated file) and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCatalog {
    entries: Vec<ArteryReference>,
}

impl ReferenceCatalog {
    /// The nine-entry adult table.
    pub fn builtin() -> Self {
        Self {
            entries: ADULT_REFERENCE_CATALOG.iter().map(Into::into).collect(),
        }
    }

    /// Build a catalog from arbitrary entries, rejecting anything a lookup
    /// could not resolve unambiguously.
    pub fn new(entries: Vec<ArteryReference>) -> CatalogResult<Self> {
        validate_entries(&entries)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ArteryReference] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn lookup(&self, key: &str) -> Option<&ArteryReference> {
        self.entries.iter().find(|e| e.is_identified_by(key))
    }

    /// Like [`lookup`](Self::lookup) but an unknown key is a validation failure.
    pub fn require(&self, key: &str) -> TcdResult<&ArteryReference> {
        self.lookup(key)
            .ok_or_else(|| ValidationError::UnknownArtery { id: key.to_string() })
    }

    pub fn search(&self, query: &str) -> Vec<&ArteryReference> {
        self.entries
            .iter()
            .filter(|e| e.matches_query(query))
            .collect()
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_entries(entries: &[ArteryReference]) -> CatalogResult<()> {
    if entries.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut keys = HashSet::new();
    for entry in entries {
        if entry.id.trim().is_empty() {
            return Err(CatalogError::BlankId);
        }

        for key in std::iter::once(&entry.id).chain(entry.aliases.iter()) {
            if !keys.insert(key.trim().to_ascii_lowercase()) {
                return Err(CatalogError::DuplicateId { id: key.clone() });
            }
        }

        for (field, value) in [
            ("vps_cm_s", entry.vps_cm_s),
            ("vfd_cm_s", entry.vfd_cm_s),
            ("vm_cm_s", entry.vm_cm_s),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CatalogError::InvalidValue {
                    artery: entry.id.clone(),
                    field,
                    value,
                    reason: "must be finite and positive",
                });
            }
        }
    }

    Ok(())
}
