//! Application layer for cybergauge
//!
//! This crate contains the question-set builder use case and the port it
//! loads banks through. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::question_bank::{BankError, QuestionBankPort};
pub use use_cases::build_question_set::{BuildInput, BuildQuestionSetUseCase, BuiltQuestionSet};
