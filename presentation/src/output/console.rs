//! Console output formatter for assessments
//!
//! Renders the welcome screen, the current question with its step
//! indicator, and both result views: the generic intake's model cards and
//! the specialized assessment's condition summary.

use crate::output::formatter::OutputFormatter;
use colored::{Color, Colorize};
use neuroscreen_application::{ModelPrediction, ResultReport};
use neuroscreen_domain::{AssessmentId, CarouselController, QuestionKind, StepMarker};

/// Formats assessment screens for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Welcome screen shown before the first question
    pub fn welcome(id: AssessmentId, previous_diagnosis: Option<&str>, total: usize) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(id.title()));
        output.push('\n');

        if let Some(previous) = previous_diagnosis {
            output.push_str(&format!(
                "{} {}\n\n",
                "Initial Diagnosis:".cyan().bold(),
                previous
            ));
        }

        output.push_str(&format!("{}\n", "This assessment screens for:".cyan().bold()));
        for condition in id.condition_types() {
            output.push_str(&format!("  * {}\n", condition));
        }

        output.push_str(&format!(
            "\n{} questions. Type an answer, or {} for commands.\n",
            total,
            "/help".yellow()
        ));
        output.push_str(&format!(
            "{}\n",
            "This tool does not replace a consultation with a healthcare provider.".dimmed()
        ));

        output
    }

    /// Step indicator, e.g. `●●◉○○`
    pub fn step_indicator(markers: &[StepMarker]) -> String {
        markers
            .iter()
            .map(|m| match m {
                StepMarker::Current => "◉".cyan().bold().to_string(),
                StepMarker::Answered => "●".green().to_string(),
                StepMarker::Pending => "○".dimmed().to_string(),
            })
            .collect()
    }

    /// The question currently displayed, with its answer and any error
    pub fn question(carousel: &CarouselController) -> String {
        let question = carousel.current();
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n",
            Self::step_indicator(&carousel.step_markers()),
            format!("{}/{}", carousel.index() + 1, carousel.len()).dimmed()
        ));
        output.push_str(&format!("{}\n", question.prompt().bold()));

        match question.kind() {
            QuestionKind::Numeric { min, max } => {
                output.push_str(&format!("  {}\n", format!("({} - {})", min, max).dimmed()));
            }
            QuestionKind::Choice { options } => {
                let selected = carousel.answers().get(question.id());
                for (i, option) in options.iter().enumerate() {
                    let marker = if selected == Some(option.as_str()) {
                        "*".green().bold().to_string()
                    } else {
                        " ".to_string()
                    };
                    output.push_str(&format!("  {} {}) {}\n", marker, i + 1, option));
                }
            }
        }

        if question.is_numeric()
            && let Some(value) = carousel.answers().get(question.id())
        {
            output.push_str(&format!("  {} {}\n", "Current:".dimmed(), value));
        }

        if let Some(message) = carousel.error_message() {
            output.push_str(&Self::error(&message));
        }

        output
    }

    /// Every question with its recorded answer
    pub fn answers(carousel: &CarouselController) -> String {
        let mut output = Self::section_header("Your answers");
        for (i, question) in carousel.questions().questions().iter().enumerate() {
            let answer = match carousel.answers().get(question.id()) {
                Some(value) => value.green().to_string(),
                None => "-".dimmed().to_string(),
            };
            output.push_str(&format!("{:>3}. {}  {}\n", i + 1, question.prompt(), answer));
        }
        output
    }

    pub fn error(message: &str) -> String {
        format!("  {} {}\n", "!".red().bold(), message.red())
    }

    /// Format the result view for the report's assessment
    pub fn format(report: &ResultReport) -> String {
        if report.assessment.is_specialized() {
            Self::format_specialized(report)
        } else {
            Self::format_generic(report)
        }
    }

    /// Generic intake: one card per model, primary diagnosis, follow-up
    pub fn format_generic(report: &ResultReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Assessment Results"));
        output.push('\n');

        if !report.has_predictions() {
            output.push_str(&format!("{}\n", "No model returned a prediction.".yellow()));
        }

        for (i, prediction) in report.predictions.iter().enumerate() {
            output.push_str(&Self::model_card(i + 1, prediction, report));
        }

        output.push_str(&Self::section_header("Primary Diagnosis"));
        output.push_str(&Self::primary_line(report));
        if report.vote.total_votes > 0 {
            output.push_str(&format!(
                "  {} {} {}/{} models agree\n",
                "Based on majority vote".dimmed(),
                report.vote.vote_summary(),
                report.vote.agreeing,
                report.vote.total_votes
            ));
        }

        if let Some(key) = &report.selected_model
            && let Some(label) = report.routing_label()
        {
            output.push_str(&format!(
                "  {} {} ({})\n",
                "Selected:".cyan().bold(),
                label,
                key
            ));
        }

        match report.follow_up {
            Some(next) => output.push_str(&format!(
                "\n{} {} {}\n",
                "->".cyan(),
                format!("Continue to {}", next.title()).bold(),
                "(/continue)".yellow()
            )),
            None => output.push_str(&format!(
                "\n{}\n",
                "No specialized follow-up assessment for this result.".dimmed()
            )),
        }

        output.push_str(&Self::footer());
        output
    }

    /// Specialized assessment: condition summary, symptoms, next steps
    pub fn format_specialized(report: &ResultReport) -> String {
        let mut output = String::new();
        let info = report.info;
        let primary = report.primary.as_deref().unwrap_or("Unspecified");
        let color = Self::category_color(info.category);

        output.push_str(&Self::header(report.assessment.title()));
        output.push('\n');

        if let Some(previous) = &report.previous_diagnosis {
            output.push_str(&format!("{} {}\n\n", "Initial Diagnosis:".dimmed(), previous));
        }

        output.push_str(&format!(
            "{}\n",
            format!("{}: {}", info.category, primary).color(color).bold()
        ));
        output.push_str(&format!("{}\n", info.description));

        output.push_str(&Self::section_header("Model Predictions"));
        for prediction in &report.predictions {
            output.push_str(&format!(
                "  {:<28} {}\n",
                prediction.display_name.dimmed(),
                prediction.label
            ));
        }
        if report.vote.total_votes > 0 {
            output.push_str(&format!("  {}\n", report.vote.vote_summary()));
        }

        output.push_str(&Self::section_header("Common Symptoms"));
        for symptom in info.symptoms {
            output.push_str(&format!("  * {}\n", symptom));
        }

        output.push_str(&Self::section_header("Recommended Next Steps"));
        for (i, step) in info.next_steps.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, step));
        }

        output.push_str(&format!(
            "\n{}\n",
            "Downloadable reports and specialist search are not available in this client."
                .dimmed()
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Side-by-side comparison of every model's prediction
    pub fn comparison(report: &ResultReport) -> String {
        let mut output = Self::section_header("Model Comparison");
        for prediction in &report.predictions {
            let agrees = report.primary.as_deref() == Some(prediction.label.as_str());
            let mark = if agrees { "v".green() } else { "x".red() };
            let accuracy = prediction.details.map(|d| d.accuracy).unwrap_or("-");
            output.push_str(&format!(
                "  {} {:<6} {:<28} {:>5}  {}\n",
                mark,
                prediction.key,
                prediction.display_name,
                accuracy,
                prediction.label
            ));
        }
        output
    }

    /// Turn off ANSI colors for everything rendered afterwards
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Format as JSON
    pub fn format_json(report: &ResultReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Display color for a diagnosis category
    pub fn category_color(category: &str) -> Color {
        let lower = category.to_lowercase();
        if lower.contains("vision") {
            Color::Blue
        } else if lower.contains("cognitive") {
            Color::Magenta
        } else if lower.contains("movement") {
            Color::Green
        } else if lower.contains("headache") {
            Color::Red
        } else if lower.contains("seizure") {
            Color::Yellow
        } else if lower.contains("psychomatic") {
            Color::BrightMagenta
        } else if lower.contains("neuro") {
            Color::BrightBlue
        } else {
            Color::BrightBlack
        }
    }

    fn model_card(index: usize, prediction: &ModelPrediction, report: &ResultReport) -> String {
        let selected = report.selected_model.as_deref() == Some(prediction.key.as_str());
        let title = format!("── {}. {} ({}) ──", index, prediction.display_name, prediction.key);
        let mut output = if selected {
            format!("\n{}\n", title.green().bold())
        } else {
            format!("\n{}\n", title.yellow().bold())
        };

        let color = Self::category_color(category_of(&prediction.label));
        output.push_str(&format!(
            "  {} {}\n",
            "Prediction:".bold(),
            prediction.label.color(color)
        ));

        if let Some(details) = prediction.details {
            output.push_str(&format!(
                "  {} {}\n",
                details.description.dimmed(),
                format!("(accuracy {})", details.accuracy).dimmed()
            ));
            for feature in details.features {
                output.push_str(&format!("    - {}\n", feature));
            }
        }

        output
    }

    fn primary_line(report: &ResultReport) -> String {
        match &report.primary {
            Some(primary) => format!(
                "  {}\n  {}\n",
                primary.color(Self::category_color(category_of(primary))).bold(),
                report.info.description
            ),
            None => format!("  {}\n  {}\n", "Unspecified".bold(), report.info.description),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

/// Category for coloring a raw label; generic labels are categories themselves
fn category_of(label: &str) -> &str {
    let info = neuroscreen_domain::describe(label);
    if info.is_unspecified() { label } else { info.category }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &ResultReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &ResultReport) -> String {
        Self::format_json(report)
    }
}
