//! Per-artery reference records.

use serde::{Deserialize, Serialize};

/// Vessel family an insonated segment belongs to.
///
/// The Lindegaard ratio is only defined for [`ArteryGroup::Mca`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArteryGroup {
    /// Middle cerebral artery.
    Mca,
    /// Anterior cerebral artery.
    Aca,
    /// Posterior cerebral artery.
    Pca,
    Basilar,
    /// Internal carotid artery (siphon / extracranial).
    Ica,
}

impl ArteryGroup {
    pub fn label(self) -> &'static str {
        match self {
            ArteryGroup::Mca => "MCA",
            ArteryGroup::Aca => "ACA",
            ArteryGroup::Pca => "PCA",
            ArteryGroup::Basilar => "Basilar",
            ArteryGroup::Ica => "ICA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Right,
    Left,
}

/// Expected adult velocities for one artery, in cm/s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArteryReference {
    pub id: String,
    pub display_name: String,
    pub group: ArteryGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub vps_cm_s: f64,
    pub vfd_cm_s: f64,
    pub vm_cm_s: f64,
}

impl ArteryReference {
    pub fn is_mca(&self) -> bool {
        self.group == ArteryGroup::Mca
    }

    /// Exact identity check against the canonical id or one of the aliases.
    ///
    /// Case and surrounding whitespace are ignored; partial strings never match.
    pub fn is_identified_by(&self, key: &str) -> bool {
        let key = key.trim();
        if key.is_empty() {
            return false;
        }
        self.id.eq_ignore_ascii_case(key)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(key))
    }

    /// Loose substring match used for listing and pickers.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.to_lowercase().contains(&query)
            || self.display_name.to_lowercase().contains(&query)
            || self.group.label().to_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase().contains(&query))
    }
}
