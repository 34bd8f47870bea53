//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a fully validated assessment question
//! - [`question::VisibilityRules`]: the per-question inclusion predicate

pub mod question;
