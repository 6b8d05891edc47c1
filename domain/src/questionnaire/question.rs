//! Question value object

use serde::{Deserialize, Serialize};

/// What kind of answer a [`Question`] expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free numeric entry within inclusive bounds
    Numeric { min: f64, max: f64 },
    /// Pick one label from an ordered list
    Choice { options: Vec<String> },
}

/// A single step of an assessment (Value Object)
///
/// # Example
///
/// ```
/// use neuroscreen_domain::Question;
///
/// let age = Question::numeric("Age", "What is your age?", 18.0, 100.0);
/// assert_eq!(age.bounds(), Some((18.0, 100.0)));
///
/// let aura = Question::choice("Aura", "Do you experience aura?", ["Yes", "No"]);
/// assert_eq!(aura.resolve_choice("2"), Some("No"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    id: String,
    prompt: String,
    #[serde(flatten)]
    kind: QuestionKind,
}

impl Question {
    /// Create a numeric question with inclusive bounds
    pub fn numeric(id: impl Into<String>, prompt: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind: QuestionKind::Numeric { min, max },
        }
    }

    /// Create a choice question from an ordered list of option labels
    pub fn choice<I, S>(id: impl Into<String>, prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind: QuestionKind::Choice {
                options: options.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, QuestionKind::Numeric { .. })
    }

    /// Inclusive bounds for numeric questions
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self.kind {
            QuestionKind::Numeric { min, max } => Some((min, max)),
            QuestionKind::Choice { .. } => None,
        }
    }

    /// Option labels for choice questions (empty for numeric questions)
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::Choice { options } => options,
            QuestionKind::Numeric { .. } => &[],
        }
    }

    /// Map user input onto one of this question's option labels.
    ///
    /// Accepts a 1-based option number or a case-insensitive label.
    /// Returns `None` for numeric questions and for input that matches nothing.
    pub fn resolve_choice(&self, input: &str) -> Option<&str> {
        let options = self.options();
        let input = input.trim();

        if let Ok(n) = input.parse::<usize>()
            && n >= 1
            && n <= options.len()
        {
            return Some(&options[n - 1]);
        }

        options
            .iter()
            .find(|o| o.eq_ignore_ascii_case(input))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triggers() -> Question {
        Question::choice(
            "Triggers",
            "What typically triggers your headaches?",
            ["Stress", "Alcohol", "None"],
        )
    }

    #[test]
    fn test_numeric_question() {
        let q = Question::numeric("Age", "What is your age?", 18.0, 80.0);
        assert_eq!(q.id(), "Age");
        assert!(q.is_numeric());
        assert_eq!(q.bounds(), Some((18.0, 80.0)));
        assert!(q.options().is_empty());
    }

    #[test]
    fn test_choice_question() {
        let q = triggers();
        assert!(!q.is_numeric());
        assert_eq!(q.bounds(), None);
        assert_eq!(q.options(), ["Stress", "Alcohol", "None"]);
    }

    #[test]
    fn test_resolve_choice_by_number() {
        let q = triggers();
        assert_eq!(q.resolve_choice("1"), Some("Stress"));
        assert_eq!(q.resolve_choice(" 3 "), Some("None"));
        assert_eq!(q.resolve_choice("0"), None);
        assert_eq!(q.resolve_choice("4"), None);
    }

    #[test]
    fn test_resolve_choice_by_label() {
        let q = triggers();
        assert_eq!(q.resolve_choice("alcohol"), Some("Alcohol"));
        assert_eq!(q.resolve_choice("coffee"), None);
    }

    #[test]
    fn test_resolve_choice_on_numeric_question() {
        let q = Question::numeric("Age", "What is your age?", 18.0, 80.0);
        assert_eq!(q.resolve_choice("1"), None);
    }

    #[test]
    fn test_serialize_tagged_kind() {
        let json = serde_json::to_value(triggers()).unwrap();
        assert_eq!(json["kind"], "choice");
        assert_eq!(json["id"], "Triggers");
        assert_eq!(json["options"][1], "Alcohol");
    }
}
