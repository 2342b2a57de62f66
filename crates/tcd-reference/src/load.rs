//! Reading and writing catalog files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::artery::ArteryReference;
use crate::catalog::ReferenceCatalog;
use crate::error::{CatalogError, CatalogResult};

/// On-disk catalog layout shared by the YAML and JSON forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub arteries: Vec<ArteryReference>,
}

impl From<&ReferenceCatalog> for CatalogFile {
    fn from(catalog: &ReferenceCatalog) -> Self {
        Self {
            arteries: catalog.entries().to_vec(),
        }
    }
}

enum Format {
    Yaml,
    Json,
}

fn format_for(path: &Path) -> CatalogResult<Format> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "yaml" | "yml" => Ok(Format::Yaml),
        "json" => Ok(Format::Json),
        _ => Err(CatalogError::UnsupportedFormat { extension }),
    }
}

/// Load and validate a catalog; the format follows the file extension.
pub fn load_catalog(path: &Path) -> CatalogResult<ReferenceCatalog> {
    let format = format_for(path)?;
    let content = std::fs::read_to_string(path)?;
    let file: CatalogFile = match format {
        Format::Yaml => serde_yaml::from_str(&content)?,
        Format::Json => serde_json::from_str(&content)?,
    };
    ReferenceCatalog::new(file.arteries)
}

pub fn save_catalog(path: &Path, catalog: &ReferenceCatalog) -> CatalogResult<()> {
    let file = CatalogFile::from(catalog);
    let content = match format_for(path)? {
        Format::Yaml => serde_yaml::to_string(&file)?,
        Format::Json => serde_json::to_string_pretty(&file)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}
