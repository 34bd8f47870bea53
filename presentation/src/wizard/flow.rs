//! Interactive wizard flow.
//!
//! Four pages: Landing, Initial assessment, Questionnaire, Results. All
//! mutable state lives in one [`AssessmentSession`] owned by the loop;
//! every page reads and writes it explicitly. The builder is called with
//! the profile whenever the questionnaire needs a (re)build, and a fatal
//! bank error aborts the wizard with the session left as it was.

use crate::ConsoleFormatter;
use colored::Colorize;
use gauge_application::ports::question_bank::BankError;
use gauge_application::{BuildInput, BuildQuestionSetUseCase};
use gauge_domain::{
    Answer, AssessmentSession, BusinessProfile, Sector, TurnoverBand, WizardPage,
};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;
use tracing::debug;

/// Errors that abort the wizard.
#[derive(Error, Debug)]
pub enum WizardError {
    #[error(transparent)]
    Bank(#[from] BankError),

    #[error("terminal input error: {0}")]
    Readline(#[from] ReadlineError),
}

/// What a page decided to do next.
enum PageOutcome {
    Goto(WizardPage),
    Quit,
}

/// The interactive assessment wizard.
pub struct Wizard {
    builder: BuildQuestionSetUseCase,
    session: AssessmentSession,
    debug: bool,
}

impl Wizard {
    pub fn new(builder: BuildQuestionSetUseCase, profile: BusinessProfile) -> Self {
        Self {
            builder,
            session: AssessmentSession::new(profile),
            debug: false,
        }
    }

    /// Print the build trace after every question-set build.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Run the wizard until the user quits or finishes.
    pub fn run(mut self) -> Result<(), WizardError> {
        let mut rl = DefaultEditor::new()?;

        loop {
            let outcome = match self.session.page {
                WizardPage::Landing => self.landing(&mut rl)?,
                WizardPage::InitialAssessment => self.initial_assessment(&mut rl)?,
                WizardPage::Questionnaire => self.questionnaire(&mut rl)?,
                WizardPage::Results => self.results(&mut rl)?,
            };
            match outcome {
                PageOutcome::Goto(page) => self.session.page = page,
                PageOutcome::Quit => break,
            }
        }

        println!("Bye!");
        Ok(())
    }

    // ---- Pages ------------------------------------------------------

    fn landing(&mut self, rl: &mut DefaultEditor) -> Result<PageOutcome, WizardError> {
        println!();
        println!("+------------------------------------------------------------+");
        println!("|       SME Cybersecurity Self-Assessment - cybergauge       |");
        println!("+------------------------------------------------------------+");
        println!();
        println!(
            "This short assessment adapts to your business. Start with a quick\n\
             initial assessment, then answer one question at a time. You will\n\
             receive a simple summary with strengths and improvements."
        );
        println!();
        println!(
            "{} basic knowledge of your devices, networks, payments and data handling.",
            "What you will need:".bold()
        );
        println!();

        match read_line(rl, "Press Enter to start (or q to quit): ")? {
            Some(line) if line.eq_ignore_ascii_case("q") => Ok(PageOutcome::Quit),
            Some(_) => Ok(PageOutcome::Goto(WizardPage::InitialAssessment)),
            None => Ok(PageOutcome::Quit),
        }
    }

    fn initial_assessment(&mut self, rl: &mut DefaultEditor) -> Result<PageOutcome, WizardError> {
        println!();
        println!("{}", "Initial assessment".bold());
        println!();

        let Some(name) = read_line(rl, "Business name (optional): ")? else {
            return Ok(PageOutcome::Quit);
        };
        if !name.is_empty() {
            self.session.profile.company_name = name;
        }

        let Some(employees) = prompt_number(rl, "Number of employees", 5)? else {
            return Ok(PageOutcome::Quit);
        };
        self.session.profile.employees = employees;

        let Some(band) = choose(
            rl,
            "Annual turnover (choose a range):",
            &TurnoverBand::ALL,
            |band| band.label().to_string(),
            0,
        )?
        else {
            return Ok(PageOutcome::Quit);
        };
        self.session.profile.set_turnover(band);
        println!(
            "Detected enterprise size: {}",
            self.session.profile.size.label().bold()
        );
        println!();

        let Some(sector) = choose(
            rl,
            "Sector:",
            &Sector::SELECTABLE,
            |sector| sector.label(),
            0,
        )?
        else {
            return Ok(PageOutcome::Quit);
        };
        self.session.profile.sector = sector;

        let Some(card) = prompt_bool(
            rl,
            "We accept card payments or use point of sale systems",
            self.session.profile.card_payments,
        )?
        else {
            return Ok(PageOutcome::Quit);
        };
        self.session.profile.card_payments = card;

        let Some(data) = prompt_bool(
            rl,
            "We process personal data of individuals in the European Union",
            self.session.profile.personal_data,
        )?
        else {
            return Ok(PageOutcome::Quit);
        };
        self.session.profile.personal_data = data;

        let Some(industrial) = prompt_bool(
            rl,
            "We use production or control systems connected to networks",
            self.session.profile.industrial_systems,
        )?
        else {
            return Ok(PageOutcome::Quit);
        };
        self.session.profile.industrial_systems = industrial;

        self.build_questions()?;
        Ok(PageOutcome::Goto(WizardPage::Questionnaire))
    }

    fn questionnaire(&mut self, rl: &mut DefaultEditor) -> Result<PageOutcome, WizardError> {
        // The user may have jumped here before a build happened.
        if self.session.total() == 0 {
            self.build_questions()?;
        }
        if self.session.total() == 0 {
            println!(
                "{}",
                "No questions available for the current settings.".yellow()
            );
            return Ok(PageOutcome::Goto(WizardPage::Results));
        }

        println!();
        println!(
            "{} ({} questions for {} in {})",
            "Questionnaire".bold(),
            self.session.total(),
            self.session.profile.size,
            self.session.profile.sector.label()
        );
        println!("Answers: y = yes, p = partially or unsure, n = no");
        println!("Navigation: Enter = next, b = back, j <num> = jump, f = finish, q = quit");

        loop {
            let (position, total) = (self.session.position(), self.session.total());
            let Some(question) = self.session.current_question() else {
                return Ok(PageOutcome::Goto(WizardPage::Results));
            };
            let (id, section, text, hint) = (
                question.id.clone(),
                question.section.clone(),
                question.text.clone(),
                question.hint.clone(),
            );

            println!();
            println!(
                "{} {}",
                format!("Question {} of {}:", position + 1, total).dimmed(),
                section.cyan().bold()
            );
            println!("{text}");
            if !hint.is_empty() {
                println!("{}", hint.dimmed());
            }
            println!(
                "Current answer: {}",
                self.session.answer_for(&id).label().yellow()
            );

            let Some(line) = read_line(rl, "> ")? else {
                return Ok(PageOutcome::Quit);
            };
            let lower = line.to_lowercase();
            match lower.as_str() {
                "y" | "yes" => self.answer_and_advance(&id, Answer::Yes),
                "p" | "partial" | "partially" => {
                    self.answer_and_advance(&id, Answer::PartiallyOrUnsure)
                }
                "n" | "no" => self.answer_and_advance(&id, Answer::No),
                "" => self.session.advance(),
                "b" | "back" => self.session.retreat(),
                "f" | "finish" => return Ok(PageOutcome::Goto(WizardPage::Results)),
                "q" | "quit" => return Ok(PageOutcome::Quit),
                _ if lower.starts_with('j') => {
                    match lower.trim_start_matches('j').trim().parse::<usize>() {
                        Ok(number) if number >= 1 => self.session.jump_to(number - 1),
                        _ => println!("Usage: j <question number>"),
                    }
                }
                _ => println!("Unrecognized input. y/p/n to answer, f to finish, q to quit."),
            }
        }
    }

    fn results(&mut self, rl: &mut DefaultEditor) -> Result<PageOutcome, WizardError> {
        println!();
        match self.session.report() {
            Some(report) => print!("{}", ConsoleFormatter::format_report(&report)),
            None => println!(
                "{}",
                "No answers yet. Go to the questionnaire to answer the questions.".yellow()
            ),
        }

        println!();
        loop {
            let Some(line) =
                read_line(rl, "b = back to questionnaire, r = start over, q = quit: ")?
            else {
                return Ok(PageOutcome::Quit);
            };
            match line.to_lowercase().as_str() {
                "b" => return Ok(PageOutcome::Goto(WizardPage::Questionnaire)),
                "r" => {
                    self.session.start_over();
                    return Ok(PageOutcome::Goto(WizardPage::Questionnaire));
                }
                "q" | "" => return Ok(PageOutcome::Quit),
                _ => println!("Please answer b, r or q."),
            }
        }
    }

    // ---- Helpers ----------------------------------------------------

    fn answer_and_advance(&mut self, question_id: &str, answer: Answer) {
        let was_last = self.session.is_on_last_question();
        self.session.record_answer(question_id, answer);
        if was_last {
            println!(
                "{}",
                "All questions seen. Type f to finish and see results.".green()
            );
        } else {
            self.session.advance();
        }
    }

    /// Rebuild the question set from the current profile. Fatal bank
    /// errors propagate; the session keeps its previous questions.
    fn build_questions(&mut self) -> Result<(), WizardError> {
        let input = BuildInput::from_profile(&self.session.profile);
        let built = self.builder.execute(&input)?;
        debug!(count = built.questions.len(), "wizard rebuilt question set");

        if self.debug {
            print!("{}", ConsoleFormatter::format_trace(&built.trace));
        }
        println!(
            "Loaded {} questions for {} / {}.",
            built.questions.len(),
            self.session.profile.size,
            self.session.profile.sector
        );
        self.session.set_questions(built.questions);
        Ok(())
    }
}

// ---- Prompt primitives ----------------------------------------------

/// Read one trimmed line; `None` means the user hit Ctrl-C or Ctrl-D.
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>, WizardError> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn prompt_number(
    rl: &mut DefaultEditor,
    question: &str,
    default: u32,
) -> Result<Option<u32>, WizardError> {
    loop {
        let Some(line) = read_line(rl, &format!("{question} [{default}]: "))? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(default));
        }
        match line.parse::<u32>() {
            Ok(n) if n >= 1 => return Ok(Some(n)),
            _ => println!("Please enter a whole number of at least 1."),
        }
    }
}

fn prompt_bool(
    rl: &mut DefaultEditor,
    question: &str,
    default: bool,
) -> Result<Option<bool>, WizardError> {
    let hint = if default { "Y/n" } else { "y/N" };
    loop {
        let Some(line) = read_line(rl, &format!("{question} [{hint}]: "))? else {
            return Ok(None);
        };
        match line.to_lowercase().as_str() {
            "" => return Ok(Some(default)),
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => println!("Please answer y or n."),
        }
    }
}

fn choose<T: Copy>(
    rl: &mut DefaultEditor,
    title: &str,
    options: &[T],
    label: impl Fn(&T) -> String,
    default_index: usize,
) -> Result<Option<T>, WizardError> {
    println!("{title}");
    for (index, option) in options.iter().enumerate() {
        println!("  {}. {}", index + 1, label(option));
    }
    loop {
        let Some(line) = read_line(
            rl,
            &format!("Choose 1-{} [{}]: ", options.len(), default_index + 1),
        )?
        else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(options[default_index]));
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(options[n - 1])),
            _ => println!("Please enter a number between 1 and {}.", options.len()),
        }
    }
}
