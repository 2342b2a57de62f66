use serde::{Deserialize, Serialize};

/// Reference ICA mean velocity assumed when none is entered, in cm/s.
pub const DEFAULT_VM_ACI_REF_CM_S: f64 = 30.0;

fn default_vm_aci_ref() -> f64 {
    DEFAULT_VM_ACI_REF_CM_S
}

/// One manually entered reading for one artery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub artery: String,
    pub vps_cm_s: f64,
    pub vfd_cm_s: f64,
    /// Extracranial ICA mean velocity; only read for MCA-group arteries.
    #[serde(default = "default_vm_aci_ref")]
    pub vm_aci_ref_cm_s: f64,
}

impl Measurement {
    pub fn new(artery: impl Into<String>, vps_cm_s: f64, vfd_cm_s: f64) -> Self {
        Self {
            artery: artery.into(),
            vps_cm_s,
            vfd_cm_s,
            vm_aci_ref_cm_s: DEFAULT_VM_ACI_REF_CM_S,
        }
    }

    pub fn with_vm_aci_ref(mut self, vm_aci_ref_cm_s: f64) -> Self {
        self.vm_aci_ref_cm_s = vm_aci_ref_cm_s;
        self
    }
}
