//! Console output formatter for assessment results and question lists

use colored::Colorize;
use gauge_application::BuiltQuestionSet;
use gauge_domain::{AssessmentReport, StatusBand};

/// How many quick-win suggestions the results view shows.
const MAX_QUICK_WINS: usize = 8;

/// Formats reports and built question sets for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the full results report
    pub fn format_report(report: &AssessmentReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Assessment Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {:.2} / 2.00  ({})\n",
            "Overall score:".cyan().bold(),
            report.overall,
            Self::status_colored(report.status)
        ));
        output.push_str(&format!(
            "{} {} / {}\n\n",
            "Questions answered:".cyan().bold(),
            report.answered,
            report.total
        ));

        output.push_str(&Self::section_header("Section scores"));
        for section in &report.sections {
            output.push_str(&format!(
                "  {} - {} ({:.2})\n",
                section.section.bold(),
                Self::status_colored(section.status),
                section.average
            ));
        }

        output.push_str(&Self::section_header("Suggested quick wins"));
        if report.quick_wins.is_empty() {
            output.push_str("  Great work. No obvious quick wins based on your answers.\n");
        } else {
            for win in report.quick_wins.iter().take(MAX_QUICK_WINS) {
                output.push_str(&format!(
                    "  * {}: {}  (current answer: {})\n",
                    win.section.bold(),
                    win.text,
                    win.answer.label().yellow()
                ));
            }
        }

        output
    }

    /// Format the report as JSON
    pub fn format_report_json(report: &AssessmentReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a built question set as a readable list
    pub fn format_question_list(built: &BuiltQuestionSet) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "{} applicable questions",
            built.questions.len()
        )));
        output.push('\n');

        let mut current_section = "";
        for (index, question) in built.questions.iter().enumerate() {
            if question.section != current_section {
                current_section = &question.section;
                output.push_str(&format!("\n{}\n", current_section.cyan().bold()));
            }
            output.push_str(&format!(
                "  {:>3}. [{}] {}\n",
                index + 1,
                question.id.dimmed(),
                question.text
            ));
        }

        output
    }

    /// Format a built question set (questions plus trace) as JSON
    pub fn format_question_list_json(built: &BuiltQuestionSet) -> String {
        let value = serde_json::json!({
            "questions": built.questions,
            "trace": built.trace,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the diagnostic trace
    pub fn format_trace(trace: &[String]) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Build trace:".dimmed()));
        for line in trace {
            output.push_str(&format!("  {}\n", line.dimmed()));
        }
        output
    }

    fn status_colored(status: StatusBand) -> String {
        match status {
            StatusBand::Good => status.label().green().bold().to_string(),
            StatusBand::NeedsImprovement => status.label().yellow().bold().to_string(),
            StatusBand::AtRisk => status.label().red().bold().to_string(),
        }
    }

    fn header(title: &str) -> String {
        format!("{}\n{}\n", title.bold(), "=".repeat(title.len()).dimmed())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("--- {title} ---").cyan().bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_domain::{Answer, QuickWin, SectionScore};

    fn sample_report() -> AssessmentReport {
        AssessmentReport {
            overall: 1.0,
            status: StatusBand::NeedsImprovement,
            sections: vec![SectionScore {
                section: "Access Control".to_string(),
                average: 1.0,
                status: StatusBand::NeedsImprovement,
                questions: 3,
            }],
            quick_wins: vec![QuickWin {
                id: "q1".to_string(),
                section: "Access Control".to_string(),
                text: "Enable multi-factor authentication".to_string(),
                answer: Answer::No,
            }],
            answered: 3,
            total: 3,
        }
    }

    #[test]
    fn test_report_mentions_sections_and_quick_wins() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_report(&sample_report());
        assert!(text.contains("Access Control"));
        assert!(text.contains("Needs improvement"));
        assert!(text.contains("multi-factor"));
    }

    #[test]
    fn test_report_json_round_trips() {
        let json = ConsoleFormatter::format_report_json(&sample_report());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["overall"], 1.0);
        assert_eq!(value["sections"][0]["section"], "Access Control");
    }

    #[test]
    fn test_empty_quick_wins_message() {
        colored::control::set_override(false);
        let mut report = sample_report();
        report.quick_wins.clear();
        let text = ConsoleFormatter::format_report(&report);
        assert!(text.contains("No obvious quick wins"));
    }
}
