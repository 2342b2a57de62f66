//! Measurement files: several readings entered in one go.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tcd_indices::{DEFAULT_VM_ACI_REF_CM_S, Measurement};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementEntry {
    pub artery: String,
    pub vps_cm_s: f64,
    pub vfd_cm_s: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_aci_ref_cm_s: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementBatch {
    /// Reference ICA Vm for entries that do not set their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_aci_ref_cm_s: Option<f64>,
    #[serde(default)]
    pub measurements: Vec<MeasurementEntry>,
}

impl MeasurementBatch {
    /// Resolve each entry's reference ICA velocity: entry, then batch, then default.
    pub fn to_measurements(&self) -> Vec<Measurement> {
        let batch_ref = self.vm_aci_ref_cm_s.unwrap_or(DEFAULT_VM_ACI_REF_CM_S);
        self.measurements
            .iter()
            .map(|entry| {
                Measurement::new(entry.artery.as_str(), entry.vps_cm_s, entry.vfd_cm_s)
                    .with_vm_aci_ref(entry.vm_aci_ref_cm_s.unwrap_or(batch_ref))
            })
            .collect()
    }
}

/// Load a measurement batch from a YAML file.
pub fn load_batch(path: &Path) -> AppResult<MeasurementBatch> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::BatchFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let batch: MeasurementBatch = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Batch(format!("Failed to parse measurement YAML: {}", e)))?;

    if batch.measurements.is_empty() {
        return Err(AppError::Batch(format!(
            "No measurements in {}",
            path.display()
        )));
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_velocity_precedence() {
        let batch = MeasurementBatch {
            vm_aci_ref_cm_s: Some(40.0),
            measurements: vec![
                MeasurementEntry {
                    artery: "ACMd (Derecha)".into(),
                    vps_cm_s: 110.0,
                    vfd_cm_s: 40.0,
                    vm_aci_ref_cm_s: Some(25.0),
                },
                MeasurementEntry {
                    artery: "ACMi (Izquierda)".into(),
                    vps_cm_s: 100.0,
                    vfd_cm_s: 40.0,
                    vm_aci_ref_cm_s: None,
                },
            ],
        };

        let ms = batch.to_measurements();
        assert_eq!(ms[0].vm_aci_ref_cm_s, 25.0);
        assert_eq!(ms[1].vm_aci_ref_cm_s, 40.0);
    }

    #[test]
    fn default_reference_without_overrides() {
        let batch: MeasurementBatch = serde_yaml::from_str(
            "measurements:\n  - { artery: Basilar, vps_cm_s: 70, vfd_cm_s: 25 }\n",
        )
        .unwrap();
        assert_eq!(
            batch.to_measurements()[0].vm_aci_ref_cm_s,
            DEFAULT_VM_ACI_REF_CM_S
        );
    }
}
