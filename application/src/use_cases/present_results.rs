//! Present Results use case.
//!
//! Turns a [`PredictionResult`] into a [`ResultReport`]: the primary
//! diagnosis chosen by vote, its descriptive metadata, one row per model
//! and, for the generic intake, the follow-up assessment the selected
//! model's label routes to.

use neuroscreen_domain::{
    AssessmentId, DiagnosisInfo, DiagnosisRouter, DiagnosisVote, ModelDetails, ModelTriplet,
    PredictionResult, describe, model_details, model_display_name, select_primary,
};
use serde::Serialize;

/// One model's prediction, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelPrediction {
    pub key: String,
    pub display_name: String,
    pub label: String,
    pub details: Option<&'static ModelDetails>,
}

/// Everything the result view needs
#[derive(Debug, Clone, Serialize)]
pub struct ResultReport {
    pub assessment: AssessmentId,
    pub previous_diagnosis: Option<String>,
    pub primary: Option<String>,
    pub info: &'static DiagnosisInfo,
    pub vote: DiagnosisVote,
    /// Voting models first, in voting order, then any extra keys
    pub predictions: Vec<ModelPrediction>,
    /// Model whose label drives routing; `None` means the primary label
    pub selected_model: Option<String>,
    pub follow_up: Option<AssessmentId>,
}

impl ResultReport {
    /// Label used for routing: the selected model's, else the primary
    pub fn routing_label(&self) -> Option<&str> {
        match &self.selected_model {
            Some(key) => self
                .predictions
                .iter()
                .find(|p| &p.key == key)
                .map(|p| p.label.as_str()),
            None => self.primary.as_deref(),
        }
    }

    /// Select the model whose label drives routing
    ///
    /// Returns `false` (report untouched) when `key` has no prediction.
    pub fn select_model(&mut self, key: &str) -> bool {
        if !self.predictions.iter().any(|p| p.key == key) {
            return false;
        }
        self.selected_model = Some(key.to_string());
        self.follow_up = route_for(self.assessment, self.routing_label());
        true
    }

    pub fn has_predictions(&self) -> bool {
        !self.predictions.is_empty()
    }
}

/// Primary-diagnosis selection and report building
pub struct ResultPresenter;

impl ResultPresenter {
    /// Leftmost majority over `models`; earlier models win ties
    pub fn select_primary(predictions: &PredictionResult, models: &ModelTriplet) -> Option<String> {
        select_primary(predictions, models)
    }

    /// Metadata for `label`, or the unspecified fallback
    pub fn describe(label: &str) -> &'static DiagnosisInfo {
        describe(label)
    }

    pub fn present(
        assessment: AssessmentId,
        predictions: &PredictionResult,
        previous_diagnosis: Option<&str>,
    ) -> ResultReport {
        let models = assessment.models();
        let vote = DiagnosisVote::tally(predictions, models);
        let primary = vote.primary.clone();
        let info = describe(primary.as_deref().unwrap_or_default());

        let voting = models
            .iter()
            .filter_map(|key| predictions.get(key).map(|label| (*key, label)));
        let extra = predictions
            .iter()
            .filter(|(key, _)| !models.iter().any(|m| m == key));
        let rows = voting
            .chain(extra)
            .map(|(key, label)| ModelPrediction {
                key: key.to_string(),
                display_name: model_display_name(key),
                label: label.to_string(),
                details: model_details(key),
            })
            .collect();

        ResultReport {
            assessment,
            previous_diagnosis: previous_diagnosis.map(str::to_string),
            follow_up: route_for(assessment, primary.as_deref()),
            primary,
            info,
            vote,
            predictions: rows,
            selected_model: None,
        }
    }
}

fn route_for(assessment: AssessmentId, label: Option<&str>) -> Option<AssessmentId> {
    if assessment.is_specialized() {
        return None;
    }
    label.and_then(DiagnosisRouter::route)
}
