//! Command parsing for the assessment REPL
//!
//! Input that does not start with `/` is an answer to the current
//! question. Question numbers typed by the user are 1-based.

use neuroscreen_application::ResultReport;

/// Input while answering questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionCommand {
    /// Raw answer text for the current question
    Answer(String),
    Next,
    Previous,
    /// Zero-based target index
    Jump(usize),
    Submit,
    Answers,
    Reset,
    /// Return to the results that led to this assessment
    Back,
    Help,
    Quit,
    Unknown(String),
}

impl QuestionCommand {
    /// Parse one input line; `None` for blank input
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if !line.starts_with('/') {
            return Some(Self::Answer(line.to_string()));
        }

        let (cmd, arg) = split_command(line);
        let command = match cmd {
            "/next" | "/n" => Self::Next,
            "/prev" | "/previous" | "/p" => Self::Previous,
            "/jump" | "/goto" | "/j" => match arg.parse::<usize>() {
                Ok(n) if n >= 1 => Self::Jump(n - 1),
                _ => Self::Unknown(line.to_string()),
            },
            "/submit" | "/s" => Self::Submit,
            "/answers" | "/a" => Self::Answers,
            "/reset" => Self::Reset,
            "/back" | "/b" => Self::Back,
            "/help" | "/h" | "/?" => Self::Help,
            "/quit" | "/exit" | "/q" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        };
        Some(command)
    }
}

/// Input while a result is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultCommand {
    /// Start the follow-up assessment for the routing label
    Continue,
    /// Model number or key whose label should drive routing
    Select(String),
    Compare,
    Restart,
    Back,
    /// An action this client does not offer
    Unavailable(&'static str),
    Help,
    Quit,
    Unknown(String),
}

impl ResultCommand {
    /// Parse one input line; `None` for blank input
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (cmd, arg) = split_command(line);
        let command = match cmd {
            "/continue" | "/c" => Self::Continue,
            "/select" | "/model" if !arg.is_empty() => Self::Select(arg.to_string()),
            "/compare" => Self::Compare,
            "/restart" | "/reset" => Self::Restart,
            "/back" | "/b" => Self::Back,
            "/report" | "/download" => Self::Unavailable("Downloading a report"),
            "/specialist" => Self::Unavailable("Finding a specialist"),
            "/help" | "/h" | "/?" => Self::Help,
            "/quit" | "/exit" | "/q" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        };
        Some(command)
    }
}

/// Resolve a 1-based card number, model key or display name to a model key
pub fn resolve_model(report: &ResultReport, input: &str) -> Option<String> {
    let input = input.trim();

    if let Ok(n) = input.parse::<usize>()
        && n >= 1
    {
        return report.predictions.get(n - 1).map(|p| p.key.clone());
    }

    report
        .predictions
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(input) || p.display_name.eq_ignore_ascii_case(input))
        .map(|p| p.key.clone())
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuroscreen_application::ResultPresenter;
    use neuroscreen_domain::{AssessmentId, PredictionResult};

    #[test]
    fn test_plain_text_is_an_answer() {
        assert_eq!(
            QuestionCommand::parse("  42 "),
            Some(QuestionCommand::Answer("42".to_string()))
        );
        assert_eq!(QuestionCommand::parse("   "), None);
    }

    #[test]
    fn test_navigation_commands() {
        assert_eq!(QuestionCommand::parse("/n"), Some(QuestionCommand::Next));
        assert_eq!(QuestionCommand::parse("/prev"), Some(QuestionCommand::Previous));
        assert_eq!(QuestionCommand::parse("/submit"), Some(QuestionCommand::Submit));
        assert_eq!(QuestionCommand::parse("/q"), Some(QuestionCommand::Quit));
    }

    #[test]
    fn test_jump_is_one_based() {
        assert_eq!(QuestionCommand::parse("/jump 3"), Some(QuestionCommand::Jump(2)));
        assert_eq!(QuestionCommand::parse("/goto  1"), Some(QuestionCommand::Jump(0)));
        assert!(matches!(
            QuestionCommand::parse("/jump 0"),
            Some(QuestionCommand::Unknown(_))
        ));
        assert!(matches!(
            QuestionCommand::parse("/jump"),
            Some(QuestionCommand::Unknown(_))
        ));
    }

    #[test]
    fn test_result_commands() {
        assert_eq!(ResultCommand::parse("/c"), Some(ResultCommand::Continue));
        assert_eq!(
            ResultCommand::parse("/select svm"),
            Some(ResultCommand::Select("svm".to_string()))
        );
        assert!(matches!(
            ResultCommand::parse("/select"),
            Some(ResultCommand::Unknown(_))
        ));
        assert!(matches!(
            ResultCommand::parse("/download"),
            Some(ResultCommand::Unavailable(_))
        ));
        assert!(matches!(
            ResultCommand::parse("maybe"),
            Some(ResultCommand::Unknown(_))
        ));
    }

    #[test]
    fn test_resolve_model() {
        let predictions: PredictionResult = [("GB", "A"), ("RF", "A"), ("SVM", "B")]
            .into_iter()
            .collect();
        let report = ResultPresenter::present(AssessmentId::General, &predictions, None);

        assert_eq!(resolve_model(&report, "3").as_deref(), Some("SVM"));
        assert_eq!(resolve_model(&report, "rf").as_deref(), Some("RF"));
        assert_eq!(
            resolve_model(&report, "gradient boosting").as_deref(),
            Some("GB")
        );
        assert_eq!(resolve_model(&report, "4"), None);
        assert_eq!(resolve_model(&report, "XGB"), None);
    }
}
