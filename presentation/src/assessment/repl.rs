//! REPL (Read-Eval-Print Loop) for answering an assessment
//!
//! One question is shown at a time. After a successful submission the
//! result view takes over; from the generic intake's results the user can
//! continue into the specialized follow-up and later come back with `/back`.

use super::command::{QuestionCommand, ResultCommand, resolve_model};
use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use colored::Colorize;
use neuroscreen_application::{
    AssessmentSession, NoProgress, ResultPresenter, ResultReport, RunAssessmentError,
    RunAssessmentUseCase, SubmissionProgress,
};
use neuroscreen_domain::{AssessmentId, OutputFormat};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io;
use tracing::{debug, warn};

enum QuestionOutcome {
    Submitted(ResultReport),
    Back,
    Quit,
}

enum ResultOutcome {
    FollowUp(AssessmentSession, ResultReport),
    Restart,
    Back,
    Quit,
}

enum Screen {
    Questions,
    Results(ResultReport),
}

/// Interactive assessment REPL
pub struct AssessmentRepl {
    use_case: RunAssessmentUseCase,
    formatter: Box<dyn OutputFormatter>,
    output: OutputConfig,
    repl: ReplConfig,
}

impl AssessmentRepl {
    /// Create a new AssessmentRepl
    pub fn new(use_case: RunAssessmentUseCase) -> Self {
        Self {
            use_case,
            formatter: Box::new(ConsoleFormatter),
            output: OutputConfig::default(),
            repl: ReplConfig::default(),
        }
    }

    /// Set output configuration
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Set REPL configuration
    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Run the interactive REPL starting with `start`
    pub async fn run(&self, start: AssessmentId, previous_diagnosis: Option<String>) -> io::Result<()> {
        let mut editor = Reedline::create();
        let mut session = self.use_case.start(start, previous_diagnosis);
        // Sessions (with their results) we continued out of, innermost last
        let mut parents: Vec<(AssessmentSession, ResultReport)> = Vec::new();

        Self::print_welcome(&session);
        let mut screen = Screen::Questions;

        loop {
            screen = match screen {
                Screen::Questions => {
                    let can_go_back = !parents.is_empty();
                    match self.questionnaire(&mut editor, &mut session, can_go_back).await? {
                        QuestionOutcome::Submitted(report) => Screen::Results(report),
                        QuestionOutcome::Back => match parents.pop() {
                            Some((parent, report)) => {
                                session = parent;
                                Screen::Results(report)
                            }
                            None => Screen::Questions,
                        },
                        QuestionOutcome::Quit => break,
                    }
                }
                Screen::Results(report) => {
                    let can_go_back = !parents.is_empty();
                    match self.results(&mut editor, &session, report, can_go_back)? {
                        ResultOutcome::FollowUp(next, report) => {
                            let parent = std::mem::replace(&mut session, next);
                            parents.push((parent, report));
                            Self::print_welcome(&session);
                            Screen::Questions
                        }
                        ResultOutcome::Restart => {
                            session.restart();
                            Self::print_welcome(&session);
                            Screen::Questions
                        }
                        ResultOutcome::Back => match parents.pop() {
                            Some((parent, report)) => {
                                session = parent;
                                Screen::Results(report)
                            }
                            None => break,
                        },
                        ResultOutcome::Quit => break,
                    }
                }
            };
        }

        println!("Bye!");
        Ok(())
    }

    async fn questionnaire(
        &self,
        editor: &mut Reedline,
        session: &mut AssessmentSession,
        can_go_back: bool,
    ) -> io::Result<QuestionOutcome> {
        print!("{}", ConsoleFormatter::question(session.carousel()));

        loop {
            let prompt = Self::prompt(session);
            let line = match editor.read_line(&prompt)? {
                Signal::Success(buffer) => buffer,
                Signal::CtrlD => return Ok(QuestionOutcome::Quit),
                _ => {
                    println!("^C");
                    continue;
                }
            };

            let Some(command) = QuestionCommand::parse(&line) else {
                continue;
            };

            match command {
                QuestionCommand::Answer(input) => {
                    if !self.answer(session, &input) {
                        continue;
                    }
                }
                QuestionCommand::Next => {
                    let _ = session.carousel_mut().go_next();
                }
                QuestionCommand::Previous => {
                    session.carousel_mut().go_previous();
                }
                QuestionCommand::Jump(index) => {
                    if !session.carousel_mut().jump_to(index) {
                        print!(
                            "{}",
                            ConsoleFormatter::error(&format!(
                                "There is no question {} (1-{})",
                                index + 1,
                                session.carousel().len()
                            ))
                        );
                        continue;
                    }
                }
                QuestionCommand::Submit => {
                    if !session.carousel().is_last() {
                        print!(
                            "{}",
                            ConsoleFormatter::error(&format!(
                                "Submit from the last question ({}); use /jump {} to get there",
                                session.carousel().len(),
                                session.carousel().len()
                            ))
                        );
                        continue;
                    }
                    match self.submit(session).await {
                        Ok(report) => return Ok(QuestionOutcome::Submitted(report)),
                        // Rendered with the question below
                        Err(RunAssessmentError::Validation(_)) => {}
                        Err(RunAssessmentError::Submission(e)) => {
                            warn!("Submission failed: {}", e);
                            print!("{}", ConsoleFormatter::error(&e.to_string()));
                            continue;
                        }
                    }
                }
                QuestionCommand::Answers => {
                    print!("{}", ConsoleFormatter::answers(session.carousel()));
                    continue;
                }
                QuestionCommand::Reset => {
                    session.restart();
                    println!("{}", "Answers cleared.".yellow());
                }
                QuestionCommand::Back => {
                    if can_go_back {
                        return Ok(QuestionOutcome::Back);
                    }
                    print!(
                        "{}",
                        ConsoleFormatter::error("There are no earlier results to go back to")
                    );
                    continue;
                }
                QuestionCommand::Help => {
                    Self::print_question_help();
                    continue;
                }
                QuestionCommand::Quit => return Ok(QuestionOutcome::Quit),
                QuestionCommand::Unknown(cmd) => {
                    println!("Unknown command: {}", cmd);
                    println!("Type /help for available commands");
                    continue;
                }
            }

            print!("{}", ConsoleFormatter::question(session.carousel()));
        }
    }

    /// Record typed input for the current question. Returns false if rejected.
    fn answer(&self, session: &mut AssessmentSession, input: &str) -> bool {
        let carousel = session.carousel_mut();
        let question = carousel.current();

        let value = if question.is_numeric() {
            input.trim().to_string()
        } else {
            match question.resolve_choice(input) {
                Some(label) => label.to_string(),
                None => {
                    print!(
                        "{}",
                        ConsoleFormatter::error(&format!(
                            "'{}' is not an option; enter 1-{} or the option text",
                            input,
                            question.options().len()
                        ))
                    );
                    return false;
                }
            }
        };

        carousel.answer_current(value);
        if self.repl.auto_advance && !carousel.is_last() {
            let _ = carousel.go_next();
        }
        true
    }

    async fn submit(&self, session: &mut AssessmentSession) -> Result<ResultReport, RunAssessmentError> {
        let progress: Box<dyn SubmissionProgress> = if !self.repl.show_progress {
            Box::new(NoProgress)
        } else if self.output.format == OutputFormat::Json {
            Box::new(SimpleProgress)
        } else {
            Box::new(ProgressReporter::new())
        };

        let predictions = session.submit(progress.as_ref()).await?;
        debug!("{} predictions for {}", predictions.len(), session.id());
        Ok(ResultPresenter::present(
            session.id(),
            &predictions,
            session.previous_diagnosis(),
        ))
    }

    fn results(
        &self,
        editor: &mut Reedline,
        session: &AssessmentSession,
        mut report: ResultReport,
        can_go_back: bool,
    ) -> io::Result<ResultOutcome> {
        self.print_report(&report);
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(format!("{} results", session.id())),
            DefaultPromptSegment::Empty,
        );

        loop {
            let line = match editor.read_line(&prompt)? {
                Signal::Success(buffer) => buffer,
                Signal::CtrlD => return Ok(ResultOutcome::Quit),
                _ => {
                    println!("^C");
                    continue;
                }
            };

            let Some(command) = ResultCommand::parse(&line) else {
                continue;
            };

            match command {
                ResultCommand::Continue => {
                    let Some(label) = report.routing_label().map(str::to_string) else {
                        print!("{}", ConsoleFormatter::error("No diagnosis to follow up on"));
                        continue;
                    };
                    match self.use_case.follow_up(session, &label) {
                        Some(next) => return Ok(ResultOutcome::FollowUp(next, report)),
                        None => println!("No specialized assessment follows '{}'.", label),
                    }
                }
                ResultCommand::Select(input) => match resolve_model(&report, &input) {
                    Some(key) => {
                        report.select_model(&key);
                        self.print_report(&report);
                    }
                    None => print!(
                        "{}",
                        ConsoleFormatter::error(&format!("No model matches '{}'", input))
                    ),
                },
                ResultCommand::Compare => print!("{}", ConsoleFormatter::comparison(&report)),
                ResultCommand::Restart => return Ok(ResultOutcome::Restart),
                ResultCommand::Back => {
                    if can_go_back {
                        return Ok(ResultOutcome::Back);
                    }
                    print!(
                        "{}",
                        ConsoleFormatter::error("There are no earlier results to go back to")
                    );
                }
                ResultCommand::Unavailable(feature) => {
                    println!("{} is not available in this client.", feature)
                }
                ResultCommand::Help => Self::print_result_help(report.assessment),
                ResultCommand::Quit => return Ok(ResultOutcome::Quit),
                ResultCommand::Unknown(cmd) => {
                    println!("Unknown command: {}", cmd);
                    println!("Type /help for available commands");
                }
            }
        }
    }

    fn print_report(&self, report: &ResultReport) {
        let output = match self.output.format {
            OutputFormat::Full => self.formatter.format(report),
            OutputFormat::Json => self.formatter.format_json(report),
        };
        println!("{}", output);
    }

    fn print_welcome(session: &AssessmentSession) {
        println!();
        println!(
            "{}",
            ConsoleFormatter::welcome(
                session.id(),
                session.previous_diagnosis(),
                session.carousel().len()
            )
        );
    }

    fn prompt(session: &AssessmentSession) -> DefaultPrompt {
        let carousel = session.carousel();
        DefaultPrompt::new(
            DefaultPromptSegment::Basic(format!(
                "{} {}/{}",
                session.id(),
                carousel.index() + 1,
                carousel.len()
            )),
            DefaultPromptSegment::Empty,
        )
    }

    fn print_question_help() {
        println!();
        println!("Type an answer: a number, or an option's number or text.");
        println!();
        println!("Commands:");
        println!("  /next, /n         - Validate and go to the next question");
        println!("  /prev, /p         - Go to the previous question");
        println!("  /jump N, /goto N  - Go to question N");
        println!("  /submit, /s       - Submit (last question only)");
        println!("  /answers, /a      - Show your answers");
        println!("  /reset            - Clear all answers");
        println!("  /back, /b         - Return to the previous results");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }

    fn print_result_help(assessment: AssessmentId) {
        println!();
        println!("Commands:");
        if !assessment.is_specialized() {
            println!("  /continue, /c     - Start the specialized follow-up assessment");
            println!("  /select N|KEY     - Route using a specific model's prediction");
        }
        println!("  /compare          - Compare model predictions");
        println!("  /restart          - Answer this assessment again");
        println!("  /back, /b         - Return to the previous results");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }
}
