//! Results aggregation.
//!
//! Per-answer scores are averaged per section, and section averages are
//! averaged into the overall score. Sections are weighted equally
//! regardless of how many questions they contain.

use crate::core::question::Question;
use crate::scoring::answer::Answer;
use crate::scoring::status::StatusBand;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Aggregated result for one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionScore {
    pub section: String,
    pub average: f64,
    pub status: StatusBand,
    pub questions: usize,
}

/// A negatively answered, low-effort high-impact question surfaced as a
/// prioritized remediation suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickWin {
    pub id: String,
    pub section: String,
    pub text: String,
    pub answer: Answer,
}

/// The full results view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub overall: f64,
    pub status: StatusBand,
    /// Section scores, sorted by section name for display.
    pub sections: Vec<SectionScore>,
    /// All quick-win candidates in question order, uncapped. The
    /// presentation layer decides how many to show.
    pub quick_wins: Vec<QuickWin>,
    pub answered: usize,
    pub total: usize,
}

impl AssessmentReport {
    /// Aggregate answers over the built question list.
    ///
    /// Unanswered questions count as [`Answer::PartiallyOrUnsure`].
    /// Returns `None` when the question list is empty; there is nothing
    /// to average over.
    pub fn from_answers(questions: &[Question], answers: &HashMap<String, Answer>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }

        let mut section_scores: BTreeMap<&str, Vec<u8>> = BTreeMap::new();
        for question in questions {
            let answer = answers.get(&question.id).copied().unwrap_or_default();
            section_scores
                .entry(question.section.as_str())
                .or_default()
                .push(answer.score());
        }

        let sections: Vec<SectionScore> = section_scores
            .into_iter()
            .map(|(section, scores)| {
                let average = scores.iter().map(|s| f64::from(*s)).sum::<f64>()
                    / scores.len() as f64;
                SectionScore {
                    section: section.to_string(),
                    average,
                    status: StatusBand::from_average(average),
                    questions: scores.len(),
                }
            })
            .collect();

        let overall =
            sections.iter().map(|s| s.average).sum::<f64>() / sections.len() as f64;

        let quick_wins = questions
            .iter()
            .filter_map(|question| {
                let answer = answers.get(&question.id).copied().unwrap_or_default();
                let w = &question.weights;
                if answer != Answer::Yes && w.effort <= 2.0 && w.impact >= 2.0 {
                    Some(QuickWin {
                        id: question.id.clone(),
                        section: question.section.clone(),
                        text: question.text.clone(),
                        answer,
                    })
                } else {
                    None
                }
            })
            .collect();

        Some(Self {
            overall,
            status: StatusBand::from_average(overall),
            sections,
            quick_wins,
            answered: questions
                .iter()
                .filter(|q| answers.contains_key(&q.id))
                .count(),
            total: questions.len(),
        })
    }
}
