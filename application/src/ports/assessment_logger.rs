//! Port for structured assessment logging.
//!
//! Defines the [`AssessmentLogger`] trait for recording assessment events
//! (session start, submissions, predictions, follow-up routing) to a
//! structured transcript.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! assessment transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured assessment event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. The timestamp is added by the adapter.
pub struct AssessmentEvent {
    /// Event type identifier (e.g., "assessment_started", "prediction_received").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AssessmentEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging assessment events to a structured log.
///
/// The `log` method is synchronous and non-fallible; adapters swallow
/// their own write failures.
pub trait AssessmentLogger: Send + Sync {
    /// Record an assessment event.
    fn log(&self, event: AssessmentEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoAssessmentLogger;

impl AssessmentLogger for NoAssessmentLogger {
    fn log(&self, _event: AssessmentEvent) {}
}
