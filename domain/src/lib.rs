//! Domain layer for cybergauge
//!
//! This crate contains the core business logic of the self-assessment:
//! the question model, the closed profile enumerations, the
//! merge-and-filter algorithm, answers and scoring, and the wizard
//! session entity. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Banks
//!
//! Questions live in layered banks scoped to a concern: a core baseline,
//! one bank per enterprise size tier, optional sector banks, and optional
//! compliance-overlay banks. [`BankKind`] names them; merging lives in
//! [`catalog`].
//!
//! ## Visibility
//!
//! Each question carries a [`VisibilityRules`] predicate over size,
//! sector, and enabled overlays that decides whether it applies to a
//! given business profile.

pub mod catalog;
pub mod core;
pub mod profile;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use catalog::{bank::BankKind, merge::merge_first_occurrence};
pub use self::core::question::{AnswerType, Question, VisibilityRules, Weights};
pub use profile::{
    UnknownTag,
    business::{BusinessProfile, TurnoverBand},
    overlay::{Overlay, OverlayFlags},
    sector::Sector,
    size::EnterpriseSize,
};
pub use scoring::{
    answer::Answer,
    report::{AssessmentReport, QuickWin, SectionScore},
    status::StatusBand,
};
pub use session::entities::{AssessmentSession, WizardPage};
