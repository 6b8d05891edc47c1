//! Run Assessment use case.
//!
//! Creates [`AssessmentSession`]s and chains them: the generic intake's
//! diagnosis label is routed to a specialized follow-up, which starts a
//! fresh session carrying that label as its previous diagnosis.
//! Specialized sessions never route further.

use super::submit_assessment::SubmitAssessmentUseCase;
use crate::config::EndpointConfig;
use crate::ports::assessment_logger::{AssessmentEvent, AssessmentLogger, NoAssessmentLogger};
use crate::ports::prediction_gateway::{PredictionGateway, SubmissionError};
use crate::ports::progress::SubmissionProgress;
use neuroscreen_domain::core::string::truncate;
use neuroscreen_domain::{
    AssessmentId, CarouselController, DiagnosisRouter, PredictionResult, QuestionSet,
    RoutingDecision, ValidationError,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when submitting a session
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunAssessmentError {
    /// The current step failed validation; nothing was sent
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// One in-progress assessment
///
/// Owns its carousel (answers + navigation state) and its submission
/// guard. The only data shared with other sessions is the previous
/// diagnosis label, copied in at creation.
pub struct AssessmentSession {
    id: AssessmentId,
    carousel: CarouselController,
    previous_diagnosis: Option<String>,
    submitter: Arc<SubmitAssessmentUseCase>,
    result: Option<PredictionResult>,
}

impl AssessmentSession {
    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselController {
        &mut self.carousel
    }

    pub fn previous_diagnosis(&self) -> Option<&str> {
        self.previous_diagnosis.as_deref()
    }

    /// Prediction from the last successful submission
    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    /// Shared handle to the submission use case (and its in-flight guard)
    pub fn submitter(&self) -> Arc<SubmitAssessmentUseCase> {
        self.submitter.clone()
    }

    /// Validate the current step, then submit all answers
    pub async fn submit(
        &mut self,
        progress: &dyn SubmissionProgress,
    ) -> Result<PredictionResult, RunAssessmentError> {
        let answers = self.carousel.submit()?;
        let predictions = self.submitter.execute(&answers, progress).await?;
        self.result = Some(predictions.clone());
        Ok(predictions)
    }

    /// Clear answers and any result, back to the first step
    pub fn restart(&mut self) {
        self.carousel.reset();
        self.result = None;
    }
}

/// Use case for starting and chaining assessments.
pub struct RunAssessmentUseCase {
    gateway: Arc<dyn PredictionGateway>,
    endpoints: EndpointConfig,
    assessment_logger: Arc<dyn AssessmentLogger>,
}

impl RunAssessmentUseCase {
    pub fn new(gateway: Arc<dyn PredictionGateway>, endpoints: EndpointConfig) -> Self {
        Self {
            gateway,
            endpoints,
            assessment_logger: Arc::new(NoAssessmentLogger),
        }
    }

    /// Create with an assessment logger.
    pub fn with_assessment_logger(mut self, logger: Arc<dyn AssessmentLogger>) -> Self {
        self.assessment_logger = logger;
        self
    }

    pub fn endpoints(&self) -> &EndpointConfig {
        &self.endpoints
    }

    /// Start `id` with its built-in question set
    pub fn start(&self, id: AssessmentId, previous_diagnosis: Option<String>) -> AssessmentSession {
        self.start_with(id, id.question_set(), previous_diagnosis)
    }

    /// Start `id` over an explicit question set
    pub fn start_with(
        &self,
        id: AssessmentId,
        questions: QuestionSet,
        previous_diagnosis: Option<String>,
    ) -> AssessmentSession {
        let endpoint = self.endpoints.resolve(id);
        info!(
            "Starting {} assessment ({} questions)",
            id,
            questions.len()
        );
        self.assessment_logger.log(AssessmentEvent::new(
            "assessment_started",
            json!({
                "assessment": id,
                "questions": questions.len(),
                "endpoint": endpoint,
                "previous_diagnosis": previous_diagnosis,
            }),
        ));

        let submitter = SubmitAssessmentUseCase::new(id, endpoint, self.gateway.clone())
            .with_assessment_logger(self.assessment_logger.clone());

        AssessmentSession {
            id,
            carousel: CarouselController::new(questions),
            previous_diagnosis,
            submitter: Arc::new(submitter),
            result: None,
        }
    }

    /// Start the specialized follow-up for `label`, if it routes anywhere
    pub fn follow_up(&self, from: &AssessmentSession, label: &str) -> Option<AssessmentSession> {
        if from.id().is_specialized() {
            debug!("{} is already specialized; not routing further", from.id());
            return None;
        }

        match DiagnosisRouter::decide(label) {
            RoutingDecision::FollowUp {
                assessment,
                keyword,
            } => {
                info!(
                    "Routing '{}' to {} assessment",
                    truncate(label, 60),
                    assessment
                );
                self.assessment_logger.log(AssessmentEvent::new(
                    "follow_up_routed",
                    json!({
                        "from": from.id(),
                        "to": assessment,
                        "label": label,
                        "keyword": keyword,
                    }),
                ));
                Some(self.start(assessment, Some(label.to_string())))
            }
            RoutingDecision::NoDisorder => {
                debug!("'{}': no further assessment needed", truncate(label, 60));
                None
            }
            RoutingDecision::Unmatched => {
                debug!("'{}' matches no follow-up assessment", truncate(label, 60));
                None
            }
        }
    }
}
