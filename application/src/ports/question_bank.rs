//! Question bank loading port.
//!
//! Separates "which banks make up an assessment" (builder policy) from
//! "how a bank is read and validated" (infrastructure). The adapter
//! reports a missing file as `Ok(None)`; whether that is fatal is
//! decided by the builder, since only core and the active size bank are
//! mandatory.

use gauge_domain::{BankKind, Question};
use thiserror::Error;

/// Fatal bank-loading failures.
///
/// Every variant aborts the whole build; there is no partial load and no
/// per-record skip. Missing *optional* files are not errors and never
/// appear here; they surface only in the build trace.
#[derive(Error, Debug)]
pub enum BankError {
    /// `core.json` or the active size bank does not exist. The
    /// assessment cannot proceed without them.
    #[error("mandatory question bank not found: {file}")]
    MissingMandatoryFile { file: String },

    /// The file decodes as JSON but a record violates the Question
    /// schema (missing key, unknown key, wrong type, tag outside a
    /// closed set).
    #[error("{file}: {detail}")]
    Schema { file: String, detail: String },

    /// The file's root is not an array, or is not parseable JSON at all.
    #[error("{file}: {detail}")]
    MalformedDocument { file: String, detail: String },

    /// The file exists but could not be read.
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

/// Port for loading one validated question bank.
pub trait QuestionBankPort: Send + Sync {
    /// Load the bank for `kind`.
    ///
    /// Returns `Ok(None)` when the bank file does not exist, and
    /// `Ok(Some(questions))` when it exists, parses, and every record
    /// passes schema validation. Any violation is a fatal [`BankError`].
    fn load(&self, kind: &BankKind) -> Result<Option<Vec<Question>>, BankError>;
}
