use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lindegaard ratio as reported: a number for MCA-group arteries, an explicit
/// "not applicable" marker everywhere else.
///
/// Serialized as a plain number or the string `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lindegaard {
    Ratio(f64),
    NotApplicable,
}

impl Lindegaard {
    pub const NOT_APPLICABLE_LABEL: &'static str = "N/A";

    pub fn ratio(self) -> Option<f64> {
        match self {
            Lindegaard::Ratio(r) => Some(r),
            Lindegaard::NotApplicable => None,
        }
    }

    pub fn is_applicable(self) -> bool {
        matches!(self, Lindegaard::Ratio(_))
    }
}

impl fmt::Display for Lindegaard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lindegaard::Ratio(r) => write!(f, "{r:.2}"),
            Lindegaard::NotApplicable => f.write_str(Self::NOT_APPLICABLE_LABEL),
        }
    }
}

impl Serialize for Lindegaard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Lindegaard::Ratio(r) => serializer.serialize_f64(*r),
            Lindegaard::NotApplicable => serializer.serialize_str(Self::NOT_APPLICABLE_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for Lindegaard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Ratio(f64),
            Label(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Ratio(r) => Ok(Lindegaard::Ratio(r)),
            Repr::Label(s) if s == Self::NOT_APPLICABLE_LABEL => Ok(Lindegaard::NotApplicable),
            Repr::Label(s) => Err(serde::de::Error::custom(format!(
                "expected a number or \"{}\", got \"{s}\"",
                Self::NOT_APPLICABLE_LABEL
            ))),
        }
    }
}

/// Indices for one artery, rounded to two decimals for display and storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedResult {
    /// Canonical catalog id, even when the measurement used an alias.
    pub artery: String,
    pub vps_cm_s: f64,
    pub vfd_cm_s: f64,
    pub vm_cm_s: f64,
    pub pi: f64,
    pub ri: f64,
    pub lindegaard: Lindegaard,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_two_decimals_or_na() {
        assert_eq!(Lindegaard::Ratio(4.5).to_string(), "4.50");
        assert_eq!(Lindegaard::NotApplicable.to_string(), "N/A");
    }

    #[test]
    fn zero_ratio_is_not_the_sentinel() {
        assert!(Lindegaard::Ratio(0.0).is_applicable());
        assert_ne!(Lindegaard::Ratio(0.0), Lindegaard::NotApplicable);
        assert_eq!(Lindegaard::NotApplicable.ratio(), None);
    }

    #[test]
    fn serde_shapes() {
        assert_eq!(serde_json::to_string(&Lindegaard::Ratio(4.56)).unwrap(), "4.56");
        assert_eq!(
            serde_json::to_string(&Lindegaard::NotApplicable).unwrap(),
            "\"N/A\""
        );
        let back: Lindegaard = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(back, Lindegaard::NotApplicable);
        let back: Lindegaard = serde_json::from_str("1.25").unwrap();
        assert_eq!(back, Lindegaard::Ratio(1.25));
        assert!(serde_json::from_str::<Lindegaard>("\"none\"").is_err());
    }
}
