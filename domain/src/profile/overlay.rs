//! Compliance overlays and their per-session enable flags.

use crate::profile::UnknownTag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An independently togglable compliance concern that adds questions
/// when enabled. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    PaymentCardIndustryDataSecurityStandard,
    GeneralDataProtectionRegulation,
    OperationalTechnologyAndIndustrialControl,
}

impl Overlay {
    /// All overlays. Declaration order is the stable load order for
    /// enabled overlay banks.
    pub const ALL: [Overlay; 3] = [
        Overlay::PaymentCardIndustryDataSecurityStandard,
        Overlay::GeneralDataProtectionRegulation,
        Overlay::OperationalTechnologyAndIndustrialControl,
    ];

    /// The snake_case tag used in bank files and file names.
    pub fn tag(&self) -> &'static str {
        match self {
            Overlay::PaymentCardIndustryDataSecurityStandard => {
                "payment_card_industry_data_security_standard"
            }
            Overlay::GeneralDataProtectionRegulation => "general_data_protection_regulation",
            Overlay::OperationalTechnologyAndIndustrialControl => {
                "operational_technology_and_industrial_control"
            }
        }
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Overlay::PaymentCardIndustryDataSecurityStandard => "PCI DSS",
            Overlay::GeneralDataProtectionRegulation => "GDPR",
            Overlay::OperationalTechnologyAndIndustrialControl => "OT/ICS",
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for Overlay {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Overlay::ALL
            .iter()
            .find(|overlay| overlay.tag() == s)
            .copied()
            .ok_or_else(|| {
                let expected: Vec<&str> = Overlay::ALL.iter().map(|o| o.tag()).collect();
                UnknownTag::new("overlay", s, &expected)
            })
    }
}

/// Which overlays are active for the current assessment.
///
/// A total mapping from [`Overlay`] to bool; anything not set is
/// disabled. The three fields mirror the screening facts collected on
/// the initial-assessment page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayFlags {
    /// Card payments or point-of-sale systems → PCI DSS.
    pub card_payments: bool,
    /// Personal data of EU individuals → GDPR.
    pub personal_data: bool,
    /// Networked production or control systems → OT/ICS.
    pub industrial_systems: bool,
}

impl OverlayFlags {
    pub fn new(card_payments: bool, personal_data: bool, industrial_systems: bool) -> Self {
        Self {
            card_payments,
            personal_data,
            industrial_systems,
        }
    }

    pub fn is_enabled(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::PaymentCardIndustryDataSecurityStandard => self.card_payments,
            Overlay::GeneralDataProtectionRegulation => self.personal_data,
            Overlay::OperationalTechnologyAndIndustrialControl => self.industrial_systems,
        }
    }

    /// Enabled overlays in the stable [`Overlay::ALL`] order.
    pub fn enabled(&self) -> impl Iterator<Item = Overlay> + '_ {
        Overlay::ALL.into_iter().filter(|o| self.is_enabled(*o))
    }
}
