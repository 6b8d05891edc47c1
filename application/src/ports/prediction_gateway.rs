//! Prediction gateway port
//!
//! Defines the interface for submitting completed answers to the remote
//! classification service.

use async_trait::async_trait;
use neuroscreen_domain::{AnswerStore, AssessmentId, PredictionResult};
use thiserror::Error;

/// Errors that can occur while submitting an assessment
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmissionError {
    /// The request never produced an HTTP response (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx status or a body that is not a flat label map
    #[error("Prediction service error: {0}")]
    Service(String),

    /// A submission for this assessment is still pending
    #[error("A submission is already in progress")]
    InFlight,

    #[error("No prediction endpoint is configured for the {0} assessment")]
    EndpointNotConfigured(AssessmentId),
}

/// Gateway for the classification service
///
/// One POST per call, no retries. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// Send `answers` as a flat JSON object to `endpoint`
    async fn predict(
        &self,
        endpoint: &str,
        answers: &AnswerStore,
    ) -> Result<PredictionResult, SubmissionError>;
}
