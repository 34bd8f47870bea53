//! Answers, status bands, and the results report.

pub mod answer;
pub mod report;
pub mod status;
