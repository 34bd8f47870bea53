//! The business profile collected on the initial-assessment page.

use crate::profile::overlay::OverlayFlags;
use crate::profile::sector::Sector;
use crate::profile::size::EnterpriseSize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Annual turnover band offered on the initial-assessment page.
///
/// Ranges are easier to answer than exact figures; the band is only used
/// to derive the enterprise size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnoverBand {
    #[default]
    UnderTwoMillion,
    TwoToTenMillion,
    TenToFiftyMillion,
    FiftyMillionOrMore,
}

impl TurnoverBand {
    /// All bands, in ascending order.
    pub const ALL: [TurnoverBand; 4] = [
        TurnoverBand::UnderTwoMillion,
        TurnoverBand::TwoToTenMillion,
        TurnoverBand::TenToFiftyMillion,
        TurnoverBand::FiftyMillionOrMore,
    ];

    /// The label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            TurnoverBand::UnderTwoMillion => "Less than 2 million euro",
            TurnoverBand::TwoToTenMillion => "2 to less than 10 million euro",
            TurnoverBand::TenToFiftyMillion => "10 to less than 50 million euro",
            TurnoverBand::FiftyMillionOrMore => "50 million euro or more",
        }
    }

    /// Derive the size tier from the band. The two top bands both map to
    /// medium; this model has no large tier.
    pub fn enterprise_size(&self) -> EnterpriseSize {
        match self {
            TurnoverBand::UnderTwoMillion => EnterpriseSize::Micro,
            TurnoverBand::TwoToTenMillion => EnterpriseSize::Small,
            TurnoverBand::TenToFiftyMillion | TurnoverBand::FiftyMillionOrMore => {
                EnterpriseSize::Medium
            }
        }
    }
}

impl fmt::Display for TurnoverBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything the wizard knows about the business (Entity).
///
/// `size` is normally derived from the turnover band but can be set
/// directly (the one-shot CLI mode does this).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub company_name: String,
    pub employees: u32,
    pub turnover: TurnoverBand,
    pub size: EnterpriseSize,
    pub sector: Sector,
    pub card_payments: bool,
    pub personal_data: bool,
    pub industrial_systems: bool,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            employees: 5,
            turnover: TurnoverBand::default(),
            size: EnterpriseSize::Micro,
            sector: Sector::HospitalityRetail,
            card_payments: true,
            personal_data: true,
            industrial_systems: false,
        }
    }
}

impl BusinessProfile {
    /// Set the turnover band and re-derive the size tier from it.
    pub fn set_turnover(&mut self, band: TurnoverBand) {
        self.turnover = band;
        self.size = band.enterprise_size();
    }

    /// The overlay flags implied by the screening facts.
    pub fn overlay_flags(&self) -> OverlayFlags {
        OverlayFlags::new(self.card_payments, self.personal_data, self.industrial_systems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::overlay::Overlay;

    #[test]
    fn test_turnover_derives_size() {
        assert_eq!(
            TurnoverBand::UnderTwoMillion.enterprise_size(),
            EnterpriseSize::Micro
        );
        assert_eq!(
            TurnoverBand::TwoToTenMillion.enterprise_size(),
            EnterpriseSize::Small
        );
        assert_eq!(
            TurnoverBand::TenToFiftyMillion.enterprise_size(),
            EnterpriseSize::Medium
        );
        assert_eq!(
            TurnoverBand::FiftyMillionOrMore.enterprise_size(),
            EnterpriseSize::Medium
        );
    }

    #[test]
    fn test_set_turnover_updates_size() {
        let mut profile = BusinessProfile::default();
        profile.set_turnover(TurnoverBand::TwoToTenMillion);
        assert_eq!(profile.size, EnterpriseSize::Small);
    }

    #[test]
    fn test_default_profile_enables_payment_and_data_overlays() {
        let flags = BusinessProfile::default().overlay_flags();
        assert!(flags.is_enabled(Overlay::PaymentCardIndustryDataSecurityStandard));
        assert!(flags.is_enabled(Overlay::GeneralDataProtectionRegulation));
        assert!(!flags.is_enabled(Overlay::OperationalTechnologyAndIndustrialControl));
    }
}
