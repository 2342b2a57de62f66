//! Status label assignment.
//!
//! Rules run in a fixed order and are not mutually exclusive:
//! 1. velocity against the artery reference sets the base label,
//! 2. a high PI appends to whatever label is current,
//! 3. an MCA Lindegaard ratio above 3 replaces the whole label.

use tcd_reference::{ArteryReference, LINDEGAARD_NORMAL_UPPER, PI_NORMAL};

pub const NORMAL: &str = "Normal";
pub const ELEVATED_VELOCITY: &str = "Elevated Velocity";
pub const LOW_VELOCITY: &str = "Low Velocity";
pub const HIGH_PI_SUFFIX: &str = " / High PI";
pub const SUGGESTS_VASOSPASM: &str = "Suggests Vasospasm";

/// VPS above `reference * factor` is elevated.
pub const ELEVATED_VELOCITY_FACTOR: f64 = 1.3;
/// Non-zero VPS below `reference * factor` is low.
pub const LOW_VELOCITY_FACTOR: f64 = 0.7;

/// Label a reading. All inputs are unrounded; `lindegaard` is `None` for
/// arteries outside the MCA group.
pub fn classify(
    reference: &ArteryReference,
    vps_cm_s: f64,
    pi: f64,
    lindegaard: Option<f64>,
) -> String {
    let mut label = String::from(NORMAL);

    if vps_cm_s > reference.vps_cm_s * ELEVATED_VELOCITY_FACTOR {
        label = ELEVATED_VELOCITY.to_string();
    } else if vps_cm_s < reference.vps_cm_s * LOW_VELOCITY_FACTOR && vps_cm_s > 0.0 {
        label = LOW_VELOCITY.to_string();
    }

    if pi > PI_NORMAL.high {
        label.push_str(HIGH_PI_SUFFIX);
    }

    if reference.is_mca()
        && let Some(ratio) = lindegaard
        && ratio > LINDEGAARD_NORMAL_UPPER
    {
        label = SUGGESTS_VASOSPASM.to_string();
    }

    label
}
