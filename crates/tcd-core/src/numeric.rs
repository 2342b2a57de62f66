use crate::ValidationError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ValidationError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ValidationError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`. Zero stays valid: it means "not measured yet".
pub fn ensure_non_negative_velocity(v: Real, what: &'static str) -> Result<Real, ValidationError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(ValidationError::NegativeVelocity { what, value: v });
    }
    Ok(v)
}

/// Round to two decimals, the precision reports carry. Exact ties go to the
/// even neighbour (0.125 -> 0.12).
pub fn round2(v: Real) -> Real {
    (v * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn zero_velocity_is_accepted() {
        assert_eq!(ensure_non_negative_velocity(0.0, "vfd").unwrap(), 0.0);
    }

    #[test]
    fn negative_velocity_is_rejected() {
        let err = ensure_non_negative_velocity(-0.5, "vps").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NegativeVelocity { what: "vps", .. }
        ));
    }

    #[test]
    fn infinite_velocity_is_rejected() {
        let err = ensure_non_negative_velocity(Real::INFINITY, "vps").unwrap_err();
        assert!(matches!(err, ValidationError::NonFinite { .. }));
    }

    #[test]
    fn round2_matches_report_values() {
        assert_eq!(round2(110.0 + 40.0 * (2.0 / 3.0)), 136.67);
        assert_eq!(round2(70.0 / 110.0), 0.64);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn round2_ties_go_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.625), 0.62);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-1.125), -1.12);
    }
}
