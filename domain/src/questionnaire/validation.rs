//! Step validation
//!
//! Checks the answer for the currently displayed question against that
//! question's constraints. Failures are local: they are shown to the user
//! and never travel past the current step.

use super::answers::AnswerStore;
use super::question::{Question, QuestionKind};
use thiserror::Error;

/// Why the current step cannot be left
///
/// The `Display` text is the single message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please provide an answer before continuing")]
    MissingAnswer { question_id: String },

    #[error("Please enter a value between {min} and {max}")]
    OutOfRange {
        question_id: String,
        min: f64,
        max: f64,
    },
}

impl ValidationError {
    pub fn question_id(&self) -> &str {
        match self {
            ValidationError::MissingAnswer { question_id }
            | ValidationError::OutOfRange { question_id, .. } => question_id,
        }
    }
}

/// Validates one question's answer
pub struct StepValidator;

impl StepValidator {
    /// Validate the stored answer for `question`
    ///
    /// - no entry (or an empty one) → [`ValidationError::MissingAnswer`]
    /// - numeric answer that does not parse, is not finite, or falls outside
    ///   `[min, max]` → [`ValidationError::OutOfRange`]
    pub fn validate(question: &Question, answers: &AnswerStore) -> Result<(), ValidationError> {
        let value = match answers.get(question.id()) {
            Some(v) if !v.is_empty() => v,
            _ => {
                return Err(ValidationError::MissingAnswer {
                    question_id: question.id().to_string(),
                });
            }
        };

        if let QuestionKind::Numeric { min, max } = *question.kind() {
            let in_range = value
                .trim()
                .parse::<f64>()
                .is_ok_and(|n| n.is_finite() && n >= min && n <= max);
            if !in_range {
                return Err(ValidationError::OutOfRange {
                    question_id: question.id().to_string(),
                    min,
                    max,
                });
            }
        }

        Ok(())
    }
}
