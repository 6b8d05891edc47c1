//! Application layer for neuroscreen
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_BASE_URL, EndpointConfig};
pub use ports::{
    assessment_logger::{AssessmentEvent, AssessmentLogger, NoAssessmentLogger},
    prediction_gateway::{PredictionGateway, SubmissionError},
    progress::{NoProgress, SubmissionProgress},
};
pub use use_cases::present_results::{ModelPrediction, ResultPresenter, ResultReport};
pub use use_cases::run_assessment::{AssessmentSession, RunAssessmentError, RunAssessmentUseCase};
pub use use_cases::submit_assessment::SubmitAssessmentUseCase;
