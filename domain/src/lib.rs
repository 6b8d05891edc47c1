//! Domain layer for neuroscreen
//!
//! This crate contains the questionnaire engine, the assessment catalog and
//! the rules for interpreting prediction results. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Carousel
//!
//! Every assessment is a [`QuestionSet`] walked one step at a time by a
//! [`CarouselController`]. A step can only be left forward once its answer
//! passes the [`StepValidator`].
//!
//! ## Routing
//!
//! The generic intake predicts a broad disorder label. The
//! [`DiagnosisRouter`] maps that label to a specialized [`AssessmentId`],
//! whose own prediction is then described by [`describe`].

pub mod assessment;
pub mod config;
pub mod core;
pub mod diagnosis;
pub mod questionnaire;

// Re-export commonly used types
pub use assessment::{AssessmentId, question_set};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use diagnosis::{
    DiagnosisInfo, DiagnosisRouter, DiagnosisVote, GENERIC_MODELS, MODEL_CATALOG, ModelDetails,
    ModelTriplet, PredictionResult, ROUTING_TABLE, RoutingDecision, SPECIALIZED_MODELS,
    UNSPECIFIED, describe, model_details, model_display_name, select_primary,
};
pub use questionnaire::{
    AnswerStore, CarouselController, NavigationState, Question, QuestionKind, QuestionSet,
    StepMarker, StepPosition, StepValidator, ValidationError,
};
