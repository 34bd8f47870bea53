//! Enterprise size tiers.

use crate::profile::UnknownTag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Enterprise size tier. Closed set; drives the mandatory size bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnterpriseSize {
    #[default]
    Micro,
    Small,
    Medium,
}

impl EnterpriseSize {
    /// All tiers, in ascending order.
    pub const ALL: [EnterpriseSize; 3] = [
        EnterpriseSize::Micro,
        EnterpriseSize::Small,
        EnterpriseSize::Medium,
    ];

    /// The snake_case tag used in bank files and file names.
    pub fn tag(&self) -> &'static str {
        match self {
            EnterpriseSize::Micro => "micro",
            EnterpriseSize::Small => "small",
            EnterpriseSize::Medium => "medium",
        }
    }

    /// Capitalised label for display ("Micro", "Small", "Medium").
    pub fn label(&self) -> &'static str {
        match self {
            EnterpriseSize::Micro => "Micro",
            EnterpriseSize::Small => "Small",
            EnterpriseSize::Medium => "Medium",
        }
    }
}

impl fmt::Display for EnterpriseSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for EnterpriseSize {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "micro" => Ok(EnterpriseSize::Micro),
            "small" => Ok(EnterpriseSize::Small),
            "medium" => Ok(EnterpriseSize::Medium),
            other => Err(UnknownTag::new("size", other, &["micro", "small", "medium"])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trips_through_serde() {
        for size in EnterpriseSize::ALL {
            let json = serde_json::to_string(&size).unwrap();
            assert_eq!(json, format!("\"{}\"", size.tag()));
            let back: EnterpriseSize = serde_json::from_str(&json).unwrap();
            assert_eq!(back, size);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_tag() {
        let err = "gigantic".parse::<EnterpriseSize>().unwrap_err();
        assert_eq!(err.kind, "size");
        assert!(err.to_string().contains("gigantic"));
        assert!(err.to_string().contains("micro"));
    }
}
