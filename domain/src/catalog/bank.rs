//! Bank identification (Value Object).

use crate::profile::{overlay::Overlay, sector::Sector, size::EnterpriseSize};
use std::fmt;

/// One on-disk question collection scoped to a concern.
///
/// The variant order here is also the load precedence: core, then the
/// active size tier, then the sector, then enabled overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankKind {
    /// Baseline questions for every business. Mandatory.
    Core,
    /// Questions for one size tier. Mandatory for the active size.
    Size(EnterpriseSize),
    /// Sector-specific questions. Optional; a sector without a bank file
    /// contributes nothing.
    Sector(Sector),
    /// Compliance-overlay questions. Optional per overlay.
    Overlay(Overlay),
}

impl BankKind {
    /// File name of this bank inside the `questions/` directory.
    pub fn file_name(&self) -> String {
        match self {
            BankKind::Core => "core.json".to_string(),
            BankKind::Size(size) => format!("size_{}.json", size.tag()),
            BankKind::Sector(sector) => format!("sector_{}.json", sector.tag()),
            BankKind::Overlay(overlay) => format!("overlays_{}.json", overlay.tag()),
        }
    }

    /// Whether a missing file for this bank aborts the build.
    pub fn is_mandatory(&self) -> bool {
        matches!(self, BankKind::Core | BankKind::Size(_))
    }
}

impl fmt::Display for BankKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}
