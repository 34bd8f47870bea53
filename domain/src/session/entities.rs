//! Session domain entities.
//!
//! All mutable per-run state lives in one explicit [`AssessmentSession`]
//! value owned by the wizard loop and passed by reference between steps.
//! There is no module-level state anywhere.

use crate::core::question::Question;
use crate::profile::business::BusinessProfile;
use crate::scoring::answer::Answer;
use crate::scoring::report::AssessmentReport;
use std::collections::HashMap;

/// The wizard pages, in their natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardPage {
    #[default]
    Landing,
    InitialAssessment,
    Questionnaire,
    Results,
}

/// One user's assessment run (Entity).
///
/// Holds the profile, the built question list, the answer map, and the
/// navigation position. The builder never reads or mutates this; it is
/// owned entirely by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct AssessmentSession {
    pub profile: BusinessProfile,
    pub page: WizardPage,
    questions: Vec<Question>,
    answers: HashMap<String, Answer>,
    position: usize,
}

impl AssessmentSession {
    pub fn new(profile: BusinessProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Install a freshly built question list and rewind to the first
    /// question. Existing answers are kept; answers to questions no
    /// longer present simply stop contributing to the score.
    pub fn set_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.position = 0;
    }

    /// The question at the current position, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    /// Zero-based position, clamped to the question list.
    pub fn position(&self) -> usize {
        self.position.min(self.questions.len().saturating_sub(1))
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn record_answer(&mut self, question_id: impl Into<String>, answer: Answer) {
        self.answers.insert(question_id.into(), answer);
    }

    /// The recorded answer for a question, defaulting to
    /// "Partially or unsure" when none was given.
    pub fn answer_for(&self, question_id: &str) -> Answer {
        self.answers.get(question_id).copied().unwrap_or_default()
    }

    pub fn answered_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| self.answers.contains_key(&q.id))
            .count()
    }

    /// Move to the next question; stays put on the last one.
    pub fn advance(&mut self) {
        if self.position + 1 < self.questions.len() {
            self.position += 1;
        }
    }

    /// Move to the previous question; stays put on the first one.
    pub fn retreat(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Jump to a zero-based position, clamped to the question list.
    pub fn jump_to(&mut self, position: usize) {
        self.position = position.min(self.questions.len().saturating_sub(1));
    }

    pub fn is_on_last_question(&self) -> bool {
        self.position + 1 >= self.questions.len()
    }

    /// Aggregate the current answers into a results report.
    pub fn report(&self) -> Option<AssessmentReport> {
        AssessmentReport::from_answers(&self.questions, &self.answers)
    }

    /// Clear answers and position but keep the profile and question
    /// list ("Start over" on the results page).
    pub fn start_over(&mut self) {
        self.answers.clear();
        self.position = 0;
    }

    /// Reinitialize everything to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question::{AnswerType, VisibilityRules, Weights};
    use crate::profile::sector::Sector;
    use crate::profile::size::EnterpriseSize;

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            section: "A".to_string(),
            text: String::new(),
            hint: String::new(),
            answer_type: AnswerType::TrafficLight,
            weights: Weights {
                importance: 2.0,
                effort: 2.0,
                impact: 2.0,
            },
            visibility_rules: VisibilityRules {
                sizes: vec![EnterpriseSize::Micro],
                sectors: vec![Sector::All],
                overlays: vec![],
            },
            framework_references: vec![],
        }
    }

    fn session_with(n: usize) -> AssessmentSession {
        let mut session = AssessmentSession::default();
        session.set_questions((0..n).map(|i| question(&format!("q{i}"))).collect());
        session
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut session = session_with(3);
        session.retreat();
        assert_eq!(session.position(), 0);
        session.advance();
        session.advance();
        session.advance();
        assert_eq!(session.position(), 2);
        assert!(session.is_on_last_question());
    }

    #[test]
    fn test_jump_is_clamped() {
        let mut session = session_with(3);
        session.jump_to(99);
        assert_eq!(session.position(), 2);
        session.jump_to(1);
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn test_unanswered_defaults_to_partially() {
        let session = session_with(1);
        assert_eq!(session.answer_for("q0"), Answer::PartiallyOrUnsure);
    }

    #[test]
    fn test_start_over_keeps_profile_and_questions() {
        let mut session = session_with(2);
        session.record_answer("q0", Answer::Yes);
        session.advance();
        session.start_over();
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.position(), 0);
        assert_eq!(session.total(), 2);
    }

    #[test]
    fn test_rebuild_keeps_answers() {
        let mut session = session_with(2);
        session.record_answer("q0", Answer::No);
        session.advance();
        session.set_questions(vec![question("q0")]);
        assert_eq!(session.position(), 0);
        assert_eq!(session.answer_for("q0"), Answer::No);
    }

    #[test]
    fn test_reset_returns_to_defaults() {
        let mut session = session_with(2);
        session.page = WizardPage::Results;
        session.reset();
        assert_eq!(session.page, WizardPage::Landing);
        assert_eq!(session.total(), 0);
    }
}
