//! Assessment catalog
//!
//! Identifies the nine questionnaire domains and provides their built-in
//! question sets. A specialized assessment is reached by chaining from the
//! general intake through the [`DiagnosisRouter`](crate::DiagnosisRouter).

pub mod id;
pub mod question_sets;

pub use id::AssessmentId;
pub use question_sets::question_set;
