//! Prediction result returned by the classification service

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Model name → predicted label, stored exactly as received
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionResult(BTreeMap<String, String>);

impl PredictionResult {
    pub fn new(predictions: BTreeMap<String, String>) -> Self {
        Self(predictions)
    }

    /// Label predicted by `model`, if the service returned one
    pub fn get(&self, model: &str) -> Option<&str> {
        self.0.get(model).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PredictionResult {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flat_object() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"GB":"Migraine","RF":"Cluster"}"#).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.get("GB"), Some("Migraine"));
        assert_eq!(result.get("SVM"), None);
    }

    #[test]
    fn test_rejects_non_string_values() {
        assert!(serde_json::from_str::<PredictionResult>(r#"{"GB":3}"#).is_err());
        assert!(serde_json::from_str::<PredictionResult>(r#"["GB"]"#).is_err());
    }
}
