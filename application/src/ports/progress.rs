//! Progress notification port
//!
//! Defines the interface for reporting a submission while it is in flight.

use neuroscreen_domain::AssessmentId;

/// Callback for submission progress
///
/// Implementations live in the presentation layer (e.g. a spinner).
pub trait SubmissionProgress: Send + Sync {
    /// Called right before the request is sent
    fn on_submit_start(&self, assessment: AssessmentId);

    /// Called once the request has finished, successfully or not
    fn on_submit_complete(&self, assessment: AssessmentId, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubmissionProgress for NoProgress {
    fn on_submit_start(&self, _assessment: AssessmentId) {}
    fn on_submit_complete(&self, _assessment: AssessmentId, _success: bool) {}
}
