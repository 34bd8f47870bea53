//! Build Question Set use case: the assembly engine.
//!
//! Given a profile slice (size, sector, overlay flags), loads the
//! layered banks through [`QuestionBankPort`], merges them with
//! first-occurrence-wins precedence, filters by the visibility
//! predicate, and returns the ordered result plus a human-readable
//! trace. Banks are read fresh on every call; nothing is cached.

use crate::ports::question_bank::{BankError, QuestionBankPort};
use gauge_domain::{
    BankKind, BusinessProfile, EnterpriseSize, OverlayFlags, Question, Sector,
    merge_first_occurrence,
};
use std::sync::Arc;
use tracing::debug;

/// Input for the [`BuildQuestionSetUseCase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInput {
    pub size: EnterpriseSize,
    pub sector: Sector,
    pub overlays: OverlayFlags,
}

impl BuildInput {
    pub fn new(size: EnterpriseSize, sector: Sector, overlays: OverlayFlags) -> Self {
        Self {
            size,
            sector,
            overlays,
        }
    }

    /// The slice of a business profile the builder cares about.
    pub fn from_profile(profile: &BusinessProfile) -> Self {
        Self::new(profile.size, profile.sector, profile.overlay_flags())
    }
}

/// The builder's output: the filtered ordered question list plus the
/// diagnostic trace. The trace is for an optional debug surface only and
/// never drives control flow.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuestionSet {
    pub questions: Vec<Question>,
    pub trace: Vec<String>,
}

/// Use case for assembling the applicable question set.
///
/// A pure function over its input and the on-disk bank contents: same
/// banks and same input produce the same question sequence on every
/// call. Fatal load errors propagate unchanged; no partial result is
/// ever returned.
pub struct BuildQuestionSetUseCase {
    bank: Arc<dyn QuestionBankPort>,
}

impl BuildQuestionSetUseCase {
    pub fn new(bank: Arc<dyn QuestionBankPort>) -> Self {
        Self { bank }
    }

    /// Load, merge, and filter.
    ///
    /// Load order is fixed: core, size tier, sector, then enabled
    /// overlays in their stable flag order. Core and the size bank are
    /// mandatory; a missing sector bank contributes nothing; a missing
    /// overlay bank is recorded in the trace and skipped.
    pub fn execute(&self, input: &BuildInput) -> Result<BuiltQuestionSet, BankError> {
        let mut trace = Vec::new();

        let core = self.load_mandatory(BankKind::Core, &mut trace)?;
        let size = self.load_mandatory(BankKind::Size(input.size), &mut trace)?;

        let sector_kind = BankKind::Sector(input.sector);
        let sector = self.bank.load(&sector_kind)?.unwrap_or_default();
        trace.push(format!("Loaded {}: {}", sector_kind.file_name(), sector.len()));

        let mut overlay_questions = Vec::new();
        for overlay in input.overlays.enabled() {
            match self.bank.load(&BankKind::Overlay(overlay))? {
                Some(questions) => {
                    trace.push(format!("Loaded overlay {overlay}: {}", questions.len()));
                    overlay_questions.extend(questions);
                }
                None => trace.push(format!("Missing overlay {overlay}")),
            }
        }

        let merged = merge_first_occurrence(vec![core, size, sector, overlay_questions]);
        let merged_count = merged.len();

        let questions: Vec<Question> = merged
            .into_iter()
            .filter(|q| q.is_visible_to(input.size, input.sector, &input.overlays))
            .collect();

        trace.push(format!("Final question count: {}", questions.len()));
        debug!(
            size = %input.size,
            sector = %input.sector,
            merged = merged_count,
            retained = questions.len(),
            "built question set"
        );

        Ok(BuiltQuestionSet { questions, trace })
    }

    fn load_mandatory(
        &self,
        kind: BankKind,
        trace: &mut Vec<String>,
    ) -> Result<Vec<Question>, BankError> {
        match self.bank.load(&kind)? {
            Some(questions) => {
                trace.push(format!("Loaded {}: {}", kind.file_name(), questions.len()));
                Ok(questions)
            }
            None => Err(BankError::MissingMandatoryFile {
                file: kind.file_name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_domain::{AnswerType, Overlay, VisibilityRules, Weights};
    use std::collections::HashMap;

    /// In-memory bank keyed by file name.
    struct InMemoryBank {
        banks: HashMap<String, Vec<Question>>,
    }

    impl InMemoryBank {
        fn new(entries: Vec<(BankKind, Vec<Question>)>) -> Arc<Self> {
            Arc::new(Self {
                banks: entries
                    .into_iter()
                    .map(|(kind, questions)| (kind.file_name(), questions))
                    .collect(),
            })
        }
    }

    impl QuestionBankPort for InMemoryBank {
        fn load(&self, kind: &BankKind) -> Result<Option<Vec<Question>>, BankError> {
            Ok(self.banks.get(&kind.file_name()).cloned())
        }
    }

    fn question(id: &str, rules: VisibilityRules) -> Question {
        Question {
            id: id.to_string(),
            section: "General".to_string(),
            text: format!("Question {id}"),
            hint: String::new(),
            answer_type: AnswerType::TrafficLight,
            weights: Weights {
                importance: 2.0,
                effort: 2.0,
                impact: 2.0,
            },
            visibility_rules: rules,
            framework_references: vec![],
        }
    }

    fn visible_everywhere() -> VisibilityRules {
        VisibilityRules {
            sizes: EnterpriseSize::ALL.to_vec(),
            sectors: vec![Sector::All],
            overlays: vec![],
        }
    }

    fn micro_input() -> BuildInput {
        BuildInput::new(
            EnterpriseSize::Micro,
            Sector::HospitalityRetail,
            OverlayFlags::default(),
        )
    }

    #[test]
    fn test_build_is_deterministic() {
        let bank = InMemoryBank::new(vec![
            (BankKind::Core, vec![question("c1", visible_everywhere())]),
            (
                BankKind::Size(EnterpriseSize::Micro),
                vec![question("s1", visible_everywhere())],
            ),
        ]);
        let use_case = BuildQuestionSetUseCase::new(bank);

        let first = use_case.execute(&micro_input()).unwrap();
        let second = use_case.execute(&micro_input()).unwrap();
        assert_eq!(first, second);
        let ids: Vec<&str> = first.questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "s1"]);
    }

    #[test]
    fn test_core_version_wins_on_id_collision() {
        let mut core_q = question("dup", visible_everywhere());
        core_q.text = "core wording".to_string();
        let mut size_q = question("dup", visible_everywhere());
        size_q.text = "size wording".to_string();

        let bank = InMemoryBank::new(vec![
            (BankKind::Core, vec![core_q]),
            (BankKind::Size(EnterpriseSize::Micro), vec![size_q]),
        ]);
        let built = BuildQuestionSetUseCase::new(bank)
            .execute(&micro_input())
            .unwrap();

        assert_eq!(built.questions.len(), 1);
        assert_eq!(built.questions[0].text, "core wording");
    }

    #[test]
    fn test_missing_size_bank_is_fatal() {
        let bank = InMemoryBank::new(vec![(
            BankKind::Core,
            vec![question("c1", visible_everywhere())],
        )]);
        let mut input = micro_input();
        input.size = EnterpriseSize::Medium;

        let err = BuildQuestionSetUseCase::new(bank)
            .execute(&input)
            .unwrap_err();
        assert!(matches!(
            err,
            BankError::MissingMandatoryFile { ref file } if file == "size_medium.json"
        ));
    }

    #[test]
    fn test_missing_sector_bank_contributes_nothing() {
        let core = vec![question("c1", visible_everywhere())];
        let size = vec![question("s1", visible_everywhere())];

        let with_sector = InMemoryBank::new(vec![
            (BankKind::Core, core.clone()),
            (BankKind::Size(EnterpriseSize::Micro), size.clone()),
            (BankKind::Sector(Sector::HospitalityRetail), vec![]),
        ]);
        let without_sector = InMemoryBank::new(vec![
            (BankKind::Core, core),
            (BankKind::Size(EnterpriseSize::Micro), size),
        ]);

        let a = BuildQuestionSetUseCase::new(with_sector)
            .execute(&micro_input())
            .unwrap();
        let b = BuildQuestionSetUseCase::new(without_sector)
            .execute(&micro_input())
            .unwrap();
        assert_eq!(a.questions, b.questions);
    }

    #[test]
    fn test_overlay_gating_controls_inclusion() {
        let gdpr_rules = VisibilityRules {
            sizes: EnterpriseSize::ALL.to_vec(),
            sectors: vec![Sector::All],
            overlays: vec![Overlay::GeneralDataProtectionRegulation],
        };
        let bank = InMemoryBank::new(vec![
            (BankKind::Core, vec![question("gdpr1", gdpr_rules)]),
            (BankKind::Size(EnterpriseSize::Micro), vec![]),
        ]);
        let use_case = BuildQuestionSetUseCase::new(bank);

        let disabled = use_case.execute(&micro_input()).unwrap();
        assert!(disabled.questions.is_empty());

        let mut input = micro_input();
        input.overlays.personal_data = true;
        let enabled = use_case.execute(&input).unwrap();
        assert_eq!(enabled.questions.len(), 1);
    }

    #[test]
    fn test_missing_overlay_bank_is_traced_not_fatal() {
        let bank = InMemoryBank::new(vec![
            (BankKind::Core, vec![question("c1", visible_everywhere())]),
            (BankKind::Size(EnterpriseSize::Micro), vec![]),
        ]);
        let mut input = micro_input();
        input.overlays.card_payments = true;

        let built = BuildQuestionSetUseCase::new(bank).execute(&input).unwrap();
        assert_eq!(built.questions.len(), 1);
        assert!(built.trace.iter().any(|line| line
            .contains("Missing overlay payment_card_industry_data_security_standard")));
    }

    #[test]
    fn test_trace_reports_counts_and_final_total() {
        let bank = InMemoryBank::new(vec![
            (BankKind::Core, vec![question("c1", visible_everywhere())]),
            (
                BankKind::Size(EnterpriseSize::Micro),
                vec![question("s1", visible_everywhere())],
            ),
        ]);
        let built = BuildQuestionSetUseCase::new(bank)
            .execute(&micro_input())
            .unwrap();

        assert_eq!(built.trace[0], "Loaded core.json: 1");
        assert_eq!(built.trace[1], "Loaded size_micro.json: 1");
        assert_eq!(built.trace[2], "Loaded sector_hospitality_retail.json: 0");
        assert_eq!(built.trace.last().unwrap(), "Final question count: 2");
    }

    #[test]
    fn test_size_filter_excludes_other_tiers() {
        let micro_only = VisibilityRules {
            sizes: vec![EnterpriseSize::Micro],
            sectors: vec![Sector::All],
            overlays: vec![],
        };
        let bank = InMemoryBank::new(vec![
            (BankKind::Core, vec![question("m1", micro_only)]),
            (BankKind::Size(EnterpriseSize::Small), vec![]),
        ]);
        let mut input = micro_input();
        input.size = EnterpriseSize::Small;

        let built = BuildQuestionSetUseCase::new(bank).execute(&input).unwrap();
        assert!(built.questions.is_empty());
        assert_eq!(built.trace.last().unwrap(), "Final question count: 0");
    }
}
