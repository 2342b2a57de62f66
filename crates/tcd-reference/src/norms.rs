//! Normality reference values for the derived indices.

/// Closed interval `[low, high]` considered normal for an index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexRange {
    pub low: f64,
    pub high: f64,
}

impl IndexRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.low && v <= self.high
    }
}

/// Pulsatility index.
pub const PI_NORMAL: IndexRange = IndexRange::new(0.6, 1.1);

/// Resistance index.
pub const RI_NORMAL: IndexRange = IndexRange::new(0.4, 0.7);

/// Lindegaard ratios below this are normal.
pub const LINDEGAARD_NORMAL_UPPER: f64 = 3.0;

/// Lindegaard ratios above this indicate severe vasospasm.
pub const LINDEGAARD_SEVERE_LOWER: f64 = 6.0;

/// Display band for a Lindegaard ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LindegaardGrade {
    Normal,
    MildModerateVasospasm,
    SevereVasospasm,
}

impl LindegaardGrade {
    /// `< 3` normal, `3..=6` mild/moderate, `> 6` severe.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < LINDEGAARD_NORMAL_UPPER {
            LindegaardGrade::Normal
        } else if ratio <= LINDEGAARD_SEVERE_LOWER {
            LindegaardGrade::MildModerateVasospasm
        } else {
            LindegaardGrade::SevereVasospasm
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LindegaardGrade::Normal => "Normal",
            LindegaardGrade::MildModerateVasospasm => "Mild/moderate vasospasm",
            LindegaardGrade::SevereVasospasm => "Severe vasospasm",
        }
    }
}
