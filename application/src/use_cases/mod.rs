//! Application use cases.

pub mod build_question_set;
