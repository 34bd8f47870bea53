//! The traffic-light answer (Value Object).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A three-way answer to a traffic-light question.
///
/// The serialized form matches the exact labels shown to the user, so an
/// exported answer map reads naturally. The default is the middle value;
/// unanswered questions score as "Partially or unsure".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    #[default]
    #[serde(rename = "Partially or unsure")]
    PartiallyOrUnsure,
    No,
}

impl Answer {
    /// All answers, in display order.
    pub const ALL: [Answer; 3] = [Answer::Yes, Answer::PartiallyOrUnsure, Answer::No];

    /// Fixed score contribution: 2 / 1 / 0.
    pub fn score(&self) -> u8 {
        match self {
            Answer::Yes => 2,
            Answer::PartiallyOrUnsure => 1,
            Answer::No => 0,
        }
    }

    /// The label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::PartiallyOrUnsure => "Partially or unsure",
            Answer::No => "No",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_are_two_one_zero() {
        assert_eq!(Answer::Yes.score(), 2);
        assert_eq!(Answer::PartiallyOrUnsure.score(), 1);
        assert_eq!(Answer::No.score(), 0);
    }

    #[test]
    fn test_default_is_partially_or_unsure() {
        assert_eq!(Answer::default(), Answer::PartiallyOrUnsure);
    }

    #[test]
    fn test_serialized_form_is_the_display_label() {
        let json = serde_json::to_string(&Answer::PartiallyOrUnsure).unwrap();
        assert_eq!(json, "\"Partially or unsure\"");
        let back: Answer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Answer::PartiallyOrUnsure);
    }
}
