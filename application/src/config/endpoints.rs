//! Prediction endpoint resolution.
//!
//! [`EndpointConfig`] maps each [`AssessmentId`] to the URL its answers are
//! posted to. Built-in paths are joined onto the service base URL;
//! overrides may be a path (joined the same way) or an absolute URL.

use neuroscreen_domain::AssessmentId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default classification service
pub const DEFAULT_BASE_URL: &str = "https://neuro-prediction-app-f95c50a3f746.herokuapp.com";

/// Built-in path for an assessment, if the service exposes one
pub fn default_path(id: AssessmentId) -> Option<&'static str> {
    match id {
        AssessmentId::General => Some("/predict"),
        AssessmentId::Dementia => Some("/predict_dementia"),
        AssessmentId::Headache => Some("/predict_headache"),
        AssessmentId::Vision => Some("/predict_vision"),
        AssessmentId::Neurodegenerative => Some("/predict_neuro"),
        AssessmentId::Movement
        | AssessmentId::Cognitive
        | AssessmentId::Seizure
        | AssessmentId::Psychomatic => None,
    }
}

/// Endpoint table for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    /// Per-assessment path or absolute URL, replacing the built-in path
    #[serde(default)]
    pub overrides: BTreeMap<AssessmentId, String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            overrides: BTreeMap::new(),
        }
    }

    pub fn with_override(mut self, id: AssessmentId, target: impl Into<String>) -> Self {
        self.overrides.insert(id, target.into());
        self
    }

    /// Full URL for `id`, or `None` when nothing is configured
    pub fn resolve(&self, id: AssessmentId) -> Option<String> {
        match self.overrides.get(&id) {
            Some(target) if is_absolute(target) => Some(target.clone()),
            Some(target) => Some(join(&self.base_url, target)),
            None => default_path(id).map(|path| join(&self.base_url, path)),
        }
    }
}

fn is_absolute(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = EndpointConfig::default();
        assert_eq!(
            config.resolve(AssessmentId::General).as_deref(),
            Some("https://neuro-prediction-app-f95c50a3f746.herokuapp.com/predict")
        );
        assert_eq!(
            config.resolve(AssessmentId::Neurodegenerative).as_deref(),
            Some("https://neuro-prediction-app-f95c50a3f746.herokuapp.com/predict_neuro")
        );
    }

    #[test]
    fn test_unconfigured_assessments() {
        let config = EndpointConfig::default();
        for id in [
            AssessmentId::Movement,
            AssessmentId::Cognitive,
            AssessmentId::Seizure,
            AssessmentId::Psychomatic,
        ] {
            assert_eq!(config.resolve(id), None, "{id}");
        }
    }

    #[test]
    fn test_override_path_and_url() {
        let config = EndpointConfig::new("http://localhost:5000/")
            .with_override(AssessmentId::Seizure, "predict_seizure")
            .with_override(AssessmentId::General, "https://example.org/v2/predict");
        assert_eq!(
            config.resolve(AssessmentId::Seizure).as_deref(),
            Some("http://localhost:5000/predict_seizure")
        );
        assert_eq!(
            config.resolve(AssessmentId::General).as_deref(),
            Some("https://example.org/v2/predict")
        );
        assert_eq!(
            config.resolve(AssessmentId::Headache).as_deref(),
            Some("http://localhost:5000/predict_headache")
        );
    }
}
