//! Question record and its visibility predicate.
//!
//! A [`Question`] is constructed exactly once, at the JSON load boundary,
//! and is immutable afterwards. Deserialization is the schema validator:
//! every field is required, unknown fields are rejected, and the enum
//! tags are closed sets. No downstream code ever sees a
//! partially-validated record.

use crate::profile::{EnterpriseSize, Overlay, OverlayFlags, Sector};
use serde::{Deserialize, Serialize};

/// How a question is answered.
///
/// Only the three-way traffic-light answer exists today. The set is
/// closed: an unknown tag in a bank file fails the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    /// Yes / Partially or unsure / No, scored 2 / 1 / 0.
    TrafficLight,
}

/// Prioritisation weights attached to a question.
///
/// Scoring ignores these; they drive the "quick win" suggestions on the
/// results page (low effort + high impact + negative answer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    pub importance: f64,
    pub effort: f64,
    pub impact: f64,
}

/// The per-question inclusion predicate over the business profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisibilityRules {
    /// Size tiers the question applies to.
    pub sizes: Vec<EnterpriseSize>,
    /// Sectors the question applies to; [`Sector::All`] is a wildcard.
    pub sectors: Vec<Sector>,
    /// Overlays that must ALL be enabled. Empty is vacuously satisfied.
    pub overlays: Vec<Overlay>,
}

impl VisibilityRules {
    /// Evaluate the three-part predicate against an active profile.
    pub fn allows(&self, size: EnterpriseSize, sector: Sector, overlays: &OverlayFlags) -> bool {
        self.sizes.contains(&size)
            && (self.sectors.contains(&sector) || self.sectors.contains(&Sector::All))
            && self.overlays.iter().all(|o| overlays.is_enabled(*o))
    }
}

/// One self-assessment question (Entity; identity = `id`).
///
/// Ids are globally unique across all banks after merging; see
/// [`merge_first_occurrence`](crate::catalog::merge::merge_first_occurrence)
/// for the collision policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: String,
    /// Grouping label for scoring and display.
    pub section: String,
    pub text: String,
    pub hint: String,
    pub answer_type: AnswerType,
    pub weights: Weights,
    pub visibility_rules: VisibilityRules,
    /// Framework citations; passthrough only, never used by scoring.
    pub framework_references: Vec<String>,
}

impl Question {
    /// Whether this question applies to the given profile slice.
    pub fn is_visible_to(
        &self,
        size: EnterpriseSize,
        sector: Sector,
        overlays: &OverlayFlags,
    ) -> bool {
        self.visibility_rules.allows(size, sector, overlays)
    }
}
