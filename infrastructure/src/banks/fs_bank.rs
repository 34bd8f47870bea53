//! Filesystem question bank.
//!
//! Implements [`QuestionBankPort`] by reading JSON bank files from a
//! `questions/` directory under a caller-supplied base path. Validation
//! happens entirely here, at the load boundary: the root must be a JSON
//! array, and every element must deserialize into the strongly-typed
//! [`Question`]. The first violation aborts the load with an error that
//! names the file and the offending record.

use gauge_application::ports::question_bank::{BankError, QuestionBankPort};
use gauge_domain::{BankKind, Question};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Question bank adapter that reads from the local file system.
///
/// Banks are read fresh on every call; nothing is cached, so concurrent
/// builders with different profiles never interfere.
#[derive(Debug, Clone)]
pub struct FsQuestionBank {
    base_dir: PathBuf,
}

impl FsQuestionBank {
    /// Create a bank rooted at `base_dir`; bank files are expected under
    /// `<base_dir>/questions/`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The on-disk path for a bank.
    pub fn path_for(&self, kind: &BankKind) -> PathBuf {
        self.base_dir.join("questions").join(kind.file_name())
    }

    fn decode(path: &Path, text: &str) -> Result<Vec<Question>, BankError> {
        let file = path.display().to_string();

        let root: serde_json::Value = serde_json::from_str(text).map_err(|e| {
            BankError::MalformedDocument {
                file: file.clone(),
                detail: format!("not parseable as JSON: {e}"),
            }
        })?;

        let records = root.as_array().ok_or_else(|| BankError::MalformedDocument {
            file: file.clone(),
            detail: "root must be an array of questions".to_string(),
        })?;

        let mut questions = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let question: Question =
                serde_json::from_value(record.clone()).map_err(|e| BankError::Schema {
                    file: file.clone(),
                    detail: format!("record {}: {e}", index + 1),
                })?;
            questions.push(question);
        }
        Ok(questions)
    }
}

impl QuestionBankPort for FsQuestionBank {
    fn load(&self, kind: &BankKind) -> Result<Option<Vec<Question>>, BankError> {
        let path = self.path_for(kind);
        if !path.exists() {
            debug!(file = %path.display(), "bank file absent");
            return Ok(None);
        }

        let text = fs::read_to_string(&path).map_err(|e| BankError::Io {
            file: path.display().to_string(),
            source: e,
        })?;

        let questions = Self::decode(&path, &text)?;
        debug!(file = %path.display(), count = questions.len(), "loaded bank");
        Ok(Some(questions))
    }
}
