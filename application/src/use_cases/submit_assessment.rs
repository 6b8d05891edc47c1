//! Submit Assessment use case.
//!
//! Posts a completed [`AnswerStore`] to the assessment's prediction
//! endpoint. At most one submission per assessment instance can be
//! outstanding; a second call while the first is pending returns
//! [`SubmissionError::InFlight`] without touching the network.

use crate::ports::assessment_logger::{AssessmentEvent, AssessmentLogger, NoAssessmentLogger};
use crate::ports::prediction_gateway::{PredictionGateway, SubmissionError};
use crate::ports::progress::SubmissionProgress;
use neuroscreen_domain::{AnswerStore, AssessmentId, PredictionResult};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Use case for submitting one assessment instance.
pub struct SubmitAssessmentUseCase {
    assessment: AssessmentId,
    endpoint: Option<String>,
    gateway: Arc<dyn PredictionGateway>,
    assessment_logger: Arc<dyn AssessmentLogger>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the request future completes or is dropped
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SubmitAssessmentUseCase {
    pub fn new(
        assessment: AssessmentId,
        endpoint: Option<String>,
        gateway: Arc<dyn PredictionGateway>,
    ) -> Self {
        Self {
            assessment,
            endpoint,
            gateway,
            assessment_logger: Arc::new(NoAssessmentLogger),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Create with an assessment logger.
    pub fn with_assessment_logger(mut self, logger: Arc<dyn AssessmentLogger>) -> Self {
        self.assessment_logger = logger;
        self
    }

    pub fn assessment(&self) -> AssessmentId {
        self.assessment
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Send `answers` and wait for the prediction
    pub async fn execute(
        &self,
        answers: &AnswerStore,
        progress: &dyn SubmissionProgress,
    ) -> Result<PredictionResult, SubmissionError> {
        let Some(endpoint) = self.endpoint.as_deref() else {
            warn!("No endpoint configured for {} assessment", self.assessment);
            return Err(SubmissionError::EndpointNotConfigured(self.assessment));
        };

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Ignoring submit for {}: request pending", self.assessment);
            return Err(SubmissionError::InFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        info!(
            "Submitting {} assessment ({} answers) to {}",
            self.assessment,
            answers.len(),
            endpoint
        );
        self.assessment_logger.log(AssessmentEvent::new(
            "submission_sent",
            json!({
                "assessment": self.assessment,
                "endpoint": endpoint,
                "answers": answers,
            }),
        ));

        progress.on_submit_start(self.assessment);
        let result = self.gateway.predict(endpoint, answers).await;
        progress.on_submit_complete(self.assessment, result.is_ok());

        match &result {
            Ok(predictions) => {
                debug!("Received {} predictions", predictions.len());
                self.assessment_logger.log(AssessmentEvent::new(
                    "prediction_received",
                    json!({
                        "assessment": self.assessment,
                        "predictions": predictions,
                    }),
                ));
            }
            Err(e) => {
                warn!("Submission failed: {}", e);
                self.assessment_logger.log(AssessmentEvent::new(
                    "submission_failed",
                    json!({
                        "assessment": self.assessment,
                        "error": e.to_string(),
                    }),
                ));
            }
        }

        result
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    /// Gateway returning a fixed response, optionally held until released
    pub(crate) struct MockGateway {
        response: Result<PredictionResult, SubmissionError>,
        gate: Option<Arc<Notify>>,
        calls: AtomicUsize,
        requests: Mutex<Vec<(String, AnswerStore)>>,
    }

    impl MockGateway {
        pub(crate) fn new(response: Result<PredictionResult, SubmissionError>) -> Self {
            Self {
                response,
                gate: None,
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn gated(
            response: Result<PredictionResult, SubmissionError>,
            gate: Arc<Notify>,
        ) -> Self {
            Self {
                gate: Some(gate),
                ..Self::new(response)
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub(crate) fn requests(&self) -> Vec<(String, AnswerStore)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PredictionGateway for MockGateway {
        async fn predict(
            &self,
            endpoint: &str,
            answers: &AnswerStore,
        ) -> Result<PredictionResult, SubmissionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests
                .lock()
                .unwrap()
                .push((endpoint.to_string(), answers.clone()));
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.response.clone()
        }
    }

    /// Logger capturing event types
    pub(crate) struct RecordingLogger(pub(crate) Mutex<Vec<&'static str>>);

    impl AssessmentLogger for RecordingLogger {
        fn log(&self, event: AssessmentEvent) {
            self.0.lock().unwrap().push(event.event_type);
        }
    }

    fn migraine() -> PredictionResult {
        [("GB", "Migraine"), ("RF", "Migraine"), ("SVM", "Tension-Type")]
            .into_iter()
            .collect()
    }

    #[tokio::test]
    async fn test_success_passes_result_through() {
        let gateway = Arc::new(MockGateway::new(Ok(migraine())));
        let use_case = SubmitAssessmentUseCase::new(
            AssessmentId::General,
            Some("http://svc/predict".to_string()),
            gateway.clone(),
        );
        let mut answers = AnswerStore::new();
        answers.record("age", "42");

        let result = use_case.execute(&answers, &NoProgress).await.unwrap();
        assert_eq!(result, migraine());
        assert_eq!(gateway.calls(), 1);
        let requests = gateway.requests();
        assert_eq!(requests[0].0, "http://svc/predict");
        assert_eq!(requests[0].1.get("age"), Some("42"));
        assert!(!use_case.is_in_flight());
    }

    #[tokio::test]
    async fn test_unconfigured_endpoint_makes_no_call() {
        let gateway = Arc::new(MockGateway::new(Ok(migraine())));
        let use_case = SubmitAssessmentUseCase::new(AssessmentId::Seizure, None, gateway.clone());

        let err = use_case
            .execute(&AnswerStore::new(), &NoProgress)
            .await
            .unwrap_err();
        assert_eq!(err, SubmissionError::EndpointNotConfigured(AssessmentId::Seizure));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_rejected() {
        let gate = Arc::new(Notify::new());
        let gateway = Arc::new(MockGateway::gated(Ok(migraine()), gate.clone()));
        let use_case = Arc::new(SubmitAssessmentUseCase::new(
            AssessmentId::General,
            Some("http://svc/predict".to_string()),
            gateway.clone(),
        ));

        let first = {
            let use_case = use_case.clone();
            tokio::spawn(async move { use_case.execute(&AnswerStore::new(), &NoProgress).await })
        };
        while !use_case.is_in_flight() {
            tokio::task::yield_now().await;
        }

        let second = use_case.execute(&AnswerStore::new(), &NoProgress).await;
        assert_eq!(second, Err(SubmissionError::InFlight));

        gate.notify_one();
        assert!(first.await.unwrap().is_ok());
        assert_eq!(gateway.calls(), 1);
        assert!(!use_case.is_in_flight());
    }

    #[tokio::test]
    async fn test_failure_clears_flag_and_allows_retry() {
        let gateway = Arc::new(MockGateway::new(Err(SubmissionError::Service(
            "HTTP 503".to_string(),
        ))));
        let logger = Arc::new(RecordingLogger(Mutex::new(Vec::new())));
        let use_case = SubmitAssessmentUseCase::new(
            AssessmentId::Headache,
            Some("http://svc/predict_headache".to_string()),
            gateway.clone(),
        )
        .with_assessment_logger(logger.clone());

        for _ in 0..2 {
            let err = use_case
                .execute(&AnswerStore::new(), &NoProgress)
                .await
                .unwrap_err();
            assert!(matches!(err, SubmissionError::Service(_)));
        }
        assert_eq!(gateway.calls(), 2);
        assert_eq!(
            *logger.0.lock().unwrap(),
            vec![
                "submission_sent",
                "submission_failed",
                "submission_sent",
                "submission_failed"
            ]
        );
    }
}
