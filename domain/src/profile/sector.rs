//! Business sectors.

use crate::profile::UnknownTag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Business sector. Closed set.
///
/// [`Sector::All`] is a wildcard that only appears inside
/// `visibility_rules.sectors`; it is never a selectable profile value.
/// A sector with no sector-specific bank file simply contributes no
/// questions of its own, which is how an "other/generic" business is
/// handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    /// Wildcard: matches every profile sector.
    All,
    #[default]
    HospitalityRetail,
    ProfessionalServices,
    ManufacturingLogistics,
    CreativeDigitalMarketing,
    HealthWellnessEducation,
    TechnologyStartupSaas,
}

impl Sector {
    /// Sectors a business can actually select (everything except the
    /// wildcard), in display order.
    pub const SELECTABLE: [Sector; 6] = [
        Sector::HospitalityRetail,
        Sector::ProfessionalServices,
        Sector::ManufacturingLogistics,
        Sector::CreativeDigitalMarketing,
        Sector::HealthWellnessEducation,
        Sector::TechnologyStartupSaas,
    ];

    /// The snake_case tag used in bank files and file names.
    pub fn tag(&self) -> &'static str {
        match self {
            Sector::All => "all",
            Sector::HospitalityRetail => "hospitality_retail",
            Sector::ProfessionalServices => "professional_services",
            Sector::ManufacturingLogistics => "manufacturing_logistics",
            Sector::CreativeDigitalMarketing => "creative_digital_marketing",
            Sector::HealthWellnessEducation => "health_wellness_education",
            Sector::TechnologyStartupSaas => "technology_startup_saas",
        }
    }

    /// Human-readable label ("hospitality retail", ...).
    pub fn label(&self) -> String {
        self.tag().replace('_', " ")
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for Sector {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::SELECTABLE
            .iter()
            .chain(std::iter::once(&Sector::All))
            .find(|sector| sector.tag() == s)
            .copied()
            .ok_or_else(|| {
                let expected: Vec<&str> = Sector::SELECTABLE.iter().map(|s| s.tag()).collect();
                UnknownTag::new("sector", s, &expected)
            })
    }
}
