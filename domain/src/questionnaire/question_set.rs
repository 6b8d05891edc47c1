//! Ordered question sets

use super::question::{Question, QuestionKind};
use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::HashSet;

/// An ordered, non-empty list of questions for one assessment domain
///
/// Order is navigation order. Identifiers are unique within the set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSet {
    name: String,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Create a question set from static definitions
    ///
    /// # Panics
    /// Panics if the definitions are invalid (see [`QuestionSet::try_new`])
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        match Self::try_new(name, questions) {
            Ok(set) => set,
            Err(e) => panic!("invalid question set: {e}"),
        }
    }

    /// Try to create a question set, rejecting empty sets, duplicate
    /// identifiers, choice questions without options and inverted bounds
    pub fn try_new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, DomainError> {
        let name = name.into();
        if questions.is_empty() {
            return Err(DomainError::EmptyQuestionSet(name));
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(DomainError::DuplicateQuestion(question.id().to_string()));
            }
            match question.kind() {
                QuestionKind::Choice { options } if options.is_empty() => {
                    return Err(DomainError::EmptyChoice(question.id().to_string()));
                }
                QuestionKind::Numeric { min, max } if !(min <= max) => {
                    return Err(DomainError::InvalidBounds {
                        id: question.id().to_string(),
                        min: *min,
                        max: *max,
                    });
                }
                _ => {}
            }
        }

        Ok(Self { name, questions })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed set; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age() -> Question {
        Question::numeric("Age", "What is your age?", 18.0, 100.0)
    }

    fn gender() -> Question {
        Question::choice("Gender", "What is your gender?", ["Male", "Female"])
    }

    #[test]
    fn test_valid_set() {
        let set = QuestionSet::new("intake", vec![age(), gender()]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.last_index(), 1);
        assert_eq!(set.position("Gender"), Some(1));
        assert!(set.contains("Age"));
        assert!(!set.contains("age"));
    }

    #[test]
    fn test_empty_set_rejected() {
        let err = QuestionSet::try_new("empty", vec![]).unwrap_err();
        assert_eq!(err, DomainError::EmptyQuestionSet("empty".to_string()));
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = QuestionSet::try_new("dup", vec![age(), gender(), age()]).unwrap_err();
        assert_eq!(err, DomainError::DuplicateQuestion("Age".to_string()));
    }

    #[test]
    fn test_empty_choice_rejected() {
        let empty: [&str; 0] = [];
        let err = QuestionSet::try_new("x", vec![Question::choice("Aura", "Aura?", empty)])
            .unwrap_err();
        assert_eq!(err, DomainError::EmptyChoice("Aura".to_string()));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = QuestionSet::try_new("x", vec![Question::numeric("Age", "Age?", 10.0, 5.0)])
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidBounds { .. }));
    }

    #[test]
    fn test_nan_bounds_rejected() {
        let result = QuestionSet::try_new("x", vec![Question::numeric("Age", "Age?", f64::NAN, 5.0)]);
        assert!(result.is_err());
    }

    #[test]
    #[should_panic]
    fn test_new_panics_on_invalid() {
        QuestionSet::new("empty", vec![]);
    }
}
