//! Traffic-light status bands for averaged scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status band for an average score on the 0–2 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusBand {
    Good,
    NeedsImprovement,
    AtRisk,
}

impl StatusBand {
    /// Map an average score to its band: ≥ 1.6 Good, ≥ 0.8 Needs
    /// improvement, otherwise At risk.
    pub fn from_average(average: f64) -> Self {
        if average >= 1.6 {
            StatusBand::Good
        } else if average >= 0.8 {
            StatusBand::NeedsImprovement
        } else {
            StatusBand::AtRisk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBand::Good => "Good",
            StatusBand::NeedsImprovement => "Needs improvement",
            StatusBand::AtRisk => "At risk",
        }
    }
}

impl fmt::Display for StatusBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
