use tcd_core::{TcdResult, ValidationError, ensure_finite, ensure_non_negative_velocity, round2};
use tcd_reference::{ArteryReference, ReferenceCatalog};

use crate::classify::classify;
use crate::measurement::Measurement;
use crate::result::{ComputedResult, Lindegaard};

/// Unrounded indices; classification works on these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedIndices {
    pub vm_cm_s: f64,
    pub pi: f64,
    pub ri: f64,
    /// `None` outside the MCA group.
    pub lindegaard: Option<f64>,
}

/// Derive Vm, PI, RI and (for MCA arteries) the Lindegaard ratio.
///
/// Inputs must already be validated. Zero velocities yield zero indices
/// instead of dividing by zero.
pub fn derive_indices(
    reference: &ArteryReference,
    vps_cm_s: f64,
    vfd_cm_s: f64,
    vm_aci_ref_cm_s: f64,
) -> DerivedIndices {
    let vm = vps_cm_s + vfd_cm_s * (2.0 / 3.0);
    let pi = if vm > 0.0 {
        (vps_cm_s - vfd_cm_s) / vm
    } else {
        0.0
    };
    let ri = if vps_cm_s > 0.0 {
        (vps_cm_s - vfd_cm_s) / vps_cm_s
    } else {
        0.0
    };
    let lindegaard = reference.is_mca().then(|| vm / vm_aci_ref_cm_s);

    DerivedIndices {
        vm_cm_s: vm,
        pi,
        ri,
        lindegaard,
    }
}

/// Compute the indices and status label for one measurement.
///
/// Fails with [`ValidationError`] when the artery is not in `catalog`, a
/// velocity is negative or non-finite, or an MCA measurement carries a
/// non-positive reference ICA velocity.
pub fn compute(measurement: &Measurement, catalog: &ReferenceCatalog) -> TcdResult<ComputedResult> {
    let reference = catalog.require(&measurement.artery)?;
    let vps = ensure_non_negative_velocity(measurement.vps_cm_s, "vps")?;
    let vfd = ensure_non_negative_velocity(measurement.vfd_cm_s, "vfd")?;

    let vm_aci_ref = measurement.vm_aci_ref_cm_s;
    if reference.is_mca() {
        ensure_finite(vm_aci_ref, "vm_aci_ref")?;
        if vm_aci_ref <= 0.0 {
            return Err(ValidationError::InvalidReferenceVelocity { value: vm_aci_ref });
        }
    }

    let indices = derive_indices(reference, vps, vfd, vm_aci_ref);
    let status = classify(reference, vps, indices.pi, indices.lindegaard);

    Ok(ComputedResult {
        artery: reference.id.clone(),
        vps_cm_s: vps,
        vfd_cm_s: vfd,
        vm_cm_s: round2(indices.vm_cm_s),
        pi: round2(indices.pi),
        ri: round2(indices.ri),
        lindegaard: match indices.lindegaard {
            Some(ratio) => Lindegaard::Ratio(round2(ratio)),
            None => Lindegaard::NotApplicable,
        },
        status,
    })
}
