//! Carousel navigation state machine
//!
//! Drives forward/backward movement through a [`QuestionSet`], gated by
//! [`StepValidator`]. The controller owns the assessment's [`AnswerStore`]
//! and its [`NavigationState`].
//!
//! ```text
//!              go_next (valid)            go_next (valid)
//!   ┌─────────┐ ─────────────▶ ┌────────┐ ─────────────▶ ┌────────┐
//!   │ AtFirst │                │ Middle │                │ AtLast │ ── submit ──▶ AnswerStore
//!   └─────────┘ ◀───────────── └────────┘ ◀───────────── └────────┘
//!                 go_previous               go_previous
//! ```
//!
//! Positions are derived from the index; they are never stored.

use super::answers::AnswerStore;
use super::question::Question;
use super::question_set::QuestionSet;
use super::validation::{StepValidator, ValidationError};
use crate::core::error::DomainError;

/// Where the current index sits in the question set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPosition {
    AtFirst,
    Middle,
    AtLast,
}

/// Display state of one step in the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMarker {
    Current,
    Answered,
    Pending,
}

/// Current step index and the most recent validation failure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    index: usize,
    error: Option<ValidationError>,
}

impl NavigationState {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }
}

/// Navigation/validation engine shared by every assessment
#[derive(Debug, Clone)]
pub struct CarouselController {
    questions: QuestionSet,
    answers: AnswerStore,
    state: NavigationState,
}

impl CarouselController {
    /// Start at the first question with no answers and no error
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            answers: AnswerStore::new(),
            state: NavigationState::default(),
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; a controller is built over a non-empty set
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current(&self) -> &Question {
        // index is kept within [0, len - 1] by every mutator
        &self.questions.questions()[self.state.index]
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.state.error()
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.error.as_ref().map(ToString::to_string)
    }

    pub fn position(&self) -> StepPosition {
        if self.state.index == 0 {
            StepPosition::AtFirst
        } else if self.state.index == self.questions.last_index() {
            StepPosition::AtLast
        } else {
            StepPosition::Middle
        }
    }

    pub fn is_first(&self) -> bool {
        self.state.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.state.index == self.questions.last_index()
    }

    /// Record an answer and clear the current error
    ///
    /// No validation happens here; it is deferred to navigation.
    pub fn record_answer(
        &mut self,
        id: &str,
        value: impl Into<String>,
    ) -> Result<(), DomainError> {
        if !self.questions.contains(id) {
            return Err(DomainError::UnknownQuestion(id.to_string()));
        }
        self.answers.record(id, value);
        self.state.error = None;
        Ok(())
    }

    /// Record an answer for the question currently displayed
    pub fn answer_current(&mut self, value: impl Into<String>) {
        let id = self.current().id().to_string();
        self.answers.record(id, value);
        self.state.error = None;
    }

    /// Validate the current step and advance by one
    ///
    /// At the last step a valid answer leaves the index unchanged; leaving
    /// the last step is only possible through [`submit`](Self::submit).
    pub fn go_next(&mut self) -> Result<StepPosition, ValidationError> {
        self.validate_current()?;
        if !self.is_last() {
            self.state.index += 1;
        }
        Ok(self.position())
    }

    /// Step back by one and clear the error; no-op at the first step
    pub fn go_previous(&mut self) -> StepPosition {
        if self.state.index > 0 {
            self.state.index -= 1;
            self.state.error = None;
        }
        self.position()
    }

    /// Jump straight to `target` without validating
    ///
    /// Returns `false` (state untouched) when `target` is out of range.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target < self.questions.len() {
            self.state.index = target;
            true
        } else {
            false
        }
    }

    /// Validate the current step and hand back the answers for submission
    pub fn submit(&mut self) -> Result<AnswerStore, ValidationError> {
        self.validate_current()?;
        Ok(self.answers.clone())
    }

    /// Forget all answers and return to the first step
    pub fn reset(&mut self) {
        self.answers.clear();
        self.state = NavigationState::default();
    }

    /// Marker per step for the step indicator
    pub fn step_markers(&self) -> Vec<StepMarker> {
        self.questions
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| {
                if i == self.state.index {
                    StepMarker::Current
                } else if self.answers.is_answered(q.id()) {
                    StepMarker::Answered
                } else {
                    StepMarker::Pending
                }
            })
            .collect()
    }

    fn validate_current(&mut self) -> Result<(), ValidationError> {
        match StepValidator::validate(self.current(), &self.answers) {
            Ok(()) => {
                self.state.error = None;
                Ok(())
            }
            Err(e) => {
                self.state.error = Some(e.clone());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_step() -> CarouselController {
        CarouselController::new(QuestionSet::new(
            "test",
            vec![
                Question::numeric("Age", "What is your age?", 18.0, 80.0),
                Question::choice("Gender", "What is your gender?", ["Male", "Female"]),
                Question::choice("Aura", "Do you experience aura?", ["Yes", "No"]),
            ],
        ))
    }

    #[test]
    fn test_starts_at_first_without_error() {
        let c = three_step();
        assert_eq!(c.index(), 0);
        assert_eq!(c.position(), StepPosition::AtFirst);
        assert!(c.error().is_none());
        assert!(c.answers().is_empty());
    }

    #[test]
    fn test_next_without_answer_never_advances() {
        let mut c = three_step();
        for _ in 0..5 {
            let err = c.go_next().unwrap_err();
            assert!(matches!(err, ValidationError::MissingAnswer { .. }));
            assert_eq!(c.index(), 0);
        }
        assert!(matches!(
            c.error(),
            Some(ValidationError::MissingAnswer { .. })
        ));
    }

    #[test]
    fn test_out_of_range_blocks_and_sets_error() {
        let mut c = three_step();
        c.answer_current("17");
        assert!(c.go_next().is_err());
        assert_eq!(c.index(), 0);
        assert_eq!(
            c.error_message().as_deref(),
            Some("Please enter a value between 18 and 80")
        );
    }

    #[test]
    fn test_record_answer_clears_error() {
        let mut c = three_step();
        let _ = c.go_next();
        assert!(c.error().is_some());
        c.record_answer("Age", "4").unwrap();
        assert!(c.error().is_none());
    }

    #[test]
    fn test_record_answer_unknown_id() {
        let mut c = three_step();
        let err = c.record_answer("Height", "180").unwrap_err();
        assert_eq!(err, DomainError::UnknownQuestion("Height".to_string()));
        assert!(c.answers().is_empty());
    }

    #[test]
    fn test_next_advances_through_positions() {
        let mut c = three_step();
        c.answer_current("42");
        assert_eq!(c.go_next().unwrap(), StepPosition::Middle);
        c.answer_current("Female");
        assert_eq!(c.go_next().unwrap(), StepPosition::AtLast);
        c.answer_current("Yes");
        // Blocked at the last step even with a valid answer
        assert_eq!(c.go_next().unwrap(), StepPosition::AtLast);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_previous_at_first_is_noop() {
        let mut c = three_step();
        assert_eq!(c.go_previous(), StepPosition::AtFirst);
        assert_eq!(c.index(), 0);
        assert!(c.error().is_none());
    }

    #[test]
    fn test_previous_clears_error() {
        let mut c = three_step();
        c.answer_current("30");
        c.go_next().unwrap();
        let _ = c.go_next();
        assert!(c.error().is_some());
        c.go_previous();
        assert_eq!(c.index(), 0);
        assert!(c.error().is_none());
    }

    #[test]
    fn test_jump_does_not_validate_and_keeps_answers() {
        let mut c = three_step();
        c.record_answer("Aura", "No").unwrap();
        assert!(c.jump_to(1));
        assert_eq!(c.index(), 1);
        assert!(c.jump_to(0));
        assert!(c.jump_to(2));
        assert_eq!(c.answers().get("Aura"), Some("No"));
        assert!(c.error().is_none());
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut c = three_step();
        assert!(!c.jump_to(3));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_submit_validates_current() {
        let mut c = three_step();
        c.answer_current("42");
        c.go_next().unwrap();
        c.answer_current("Male");
        c.go_next().unwrap();
        assert!(c.submit().is_err());
        assert!(c.error().is_some());

        c.answer_current("No");
        let answers = c.submit().unwrap();
        assert_eq!(answers.len(), 3);
        assert_eq!(answers.get("Age"), Some("42"));
        assert!(c.error().is_none());
    }

    #[test]
    fn test_reset() {
        let mut c = three_step();
        c.answer_current("42");
        c.go_next().unwrap();
        c.reset();
        assert_eq!(c.index(), 0);
        assert!(c.answers().is_empty());
    }

    #[test]
    fn test_step_markers() {
        let mut c = three_step();
        c.record_answer("Aura", "Yes").unwrap();
        assert_eq!(
            c.step_markers(),
            vec![StepMarker::Current, StepMarker::Pending, StepMarker::Answered]
        );
    }

    #[test]
    fn test_single_question_set_is_first_and_last() {
        let mut c = CarouselController::new(QuestionSet::new(
            "one",
            vec![Question::choice("Aura", "Aura?", ["Yes", "No"])],
        ));
        assert_eq!(c.position(), StepPosition::AtFirst);
        assert!(c.is_last());
        c.answer_current("Yes");
        assert!(c.go_next().is_ok());
        assert_eq!(c.index(), 0);
    }
}
