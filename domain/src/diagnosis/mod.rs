//! Interpreting prediction results
//!
//! - [`prediction::PredictionResult`] - the raw model → label mapping
//! - [`vote`] - primary diagnosis selection over a model triplet
//! - [`router::DiagnosisRouter`] - label → follow-up assessment
//! - [`info`] - descriptive metadata per label
//! - [`models`] - model catalog for the generic result view

pub mod info;
pub mod models;
pub mod prediction;
pub mod router;
pub mod vote;

pub use info::{DiagnosisInfo, UNSPECIFIED, describe};
pub use models::{MODEL_CATALOG, ModelDetails, model_details, model_display_name};
pub use prediction::PredictionResult;
pub use router::{DiagnosisRouter, ROUTING_TABLE, RoutingDecision};
pub use vote::{DiagnosisVote, GENERIC_MODELS, ModelTriplet, SPECIALIZED_MODELS, select_primary};
