//! Logging infrastructure - structured assessment transcript.
//!
//! Provides [`JsonlAssessmentLogger`], a JSONL file writer that implements
//! the [`AssessmentLogger`](neuroscreen_application::AssessmentLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlAssessmentLogger;
