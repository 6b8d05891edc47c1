//! Questionnaire engine
//!
//! Everything an assessment flow needs to collect answers:
//!
//! - [`question::Question`] / [`question_set::QuestionSet`] - static definitions
//! - [`answers::AnswerStore`] - the answers given so far
//! - [`validation::StepValidator`] - per-step checks
//! - [`carousel::CarouselController`] - the navigation state machine

pub mod answers;
pub mod carousel;
pub mod question;
pub mod question_set;
pub mod validation;

pub use answers::AnswerStore;
pub use carousel::{CarouselController, NavigationState, StepMarker, StepPosition};
pub use question::{Question, QuestionKind};
pub use question_set::QuestionSet;
pub use validation::{StepValidator, ValidationError};
