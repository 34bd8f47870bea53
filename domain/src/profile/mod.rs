//! Business-profile enumerations and the profile entity.
//!
//! All tags are closed sets represented as sum types. JSON and CLI input
//! go through the same serde/[`FromStr`](std::str::FromStr) boundary, so
//! an invalid tag is rejected before it can reach the engine.

pub mod business;
pub mod overlay;
pub mod sector;
pub mod size;

pub use business::{BusinessProfile, TurnoverBand};
pub use overlay::{Overlay, OverlayFlags};
pub use sector::Sector;
pub use size::EnterpriseSize;

use thiserror::Error;

/// A tag outside one of the closed enumerations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} tag '{value}' (expected one of: {expected})")]
pub struct UnknownTag {
    /// Which enumeration was being parsed ("size", "sector", "overlay").
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl UnknownTag {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}
