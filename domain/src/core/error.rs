//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised when static assessment data is malformed or an unknown
/// assessment is requested. Navigation and validation failures are
/// reported through [`ValidationError`](crate::ValidationError) instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Question set '{0}' has no questions")]
    EmptyQuestionSet(String),

    #[error("Duplicate question identifier: {0}")]
    DuplicateQuestion(String),

    #[error("Choice question '{0}' has no options")]
    EmptyChoice(String),

    #[error("Numeric question '{id}' has invalid bounds [{min}, {max}]")]
    InvalidBounds { id: String, min: f64, max: f64 },

    #[error("Unknown question identifier: {0}")]
    UnknownQuestion(String),

    #[error("Unknown assessment: {0}")]
    UnknownAssessment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_question_display() {
        let error = DomainError::DuplicateQuestion("age".to_string());
        assert_eq!(error.to_string(), "Duplicate question identifier: age");
    }

    #[test]
    fn test_invalid_bounds_display() {
        let error = DomainError::InvalidBounds {
            id: "Age".to_string(),
            min: 10.0,
            max: 5.0,
        };
        assert_eq!(
            error.to_string(),
            "Numeric question 'Age' has invalid bounds [10, 5]"
        );
    }
}
