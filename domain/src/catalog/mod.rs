//! Question catalog: bank naming and the merge algorithm.

pub mod bank;
pub mod merge;
