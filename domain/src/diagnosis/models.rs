//! Catalog of the classification models behind the generic intake

use crate::core::string::display_model_key;
use serde::Serialize;

/// Presentation details for one model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelDetails {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub accuracy: &'static str,
    pub features: &'static [&'static str],
}

pub static MODEL_CATALOG: [ModelDetails; 3] = [
    ModelDetails {
        key: "GB",
        name: "Gradient Boosting",
        description: "Our most comprehensive analysis system",
        accuracy: "94%",
        features: &[
            "In-depth symptom analysis",
            "Advanced pattern recognition",
            "High accuracy prediction",
        ],
    },
    ModelDetails {
        key: "RF",
        name: "Random Forest",
        description: "Balanced analysis considering multiple factors",
        accuracy: "92%",
        features: &[
            "Multiple data point consideration",
            "Balanced assessment approach",
            "Reliable predictions",
        ],
    },
    ModelDetails {
        key: "SVM",
        name: "Support Vector Machine",
        description: "Clear and straightforward analysis",
        accuracy: "90%",
        features: &[
            "Clear decision making",
            "Straightforward assessment",
            "Direct results",
        ],
    },
];

/// Details for a generic short key ("GB") or its specialized counterpart
/// ("Gradient_Boosting_Prediction")
pub fn model_details(key: &str) -> Option<&'static ModelDetails> {
    let short = match key {
        "Gradient_Boosting_Prediction" => "GB",
        "Random_Forest_Prediction" => "RF",
        "SVM_Prediction" => "SVM",
        other => other,
    };
    MODEL_CATALOG.iter().find(|m| m.key == short)
}

/// Human-readable model name for any key the service may return
pub fn model_display_name(key: &str) -> String {
    match MODEL_CATALOG.iter().find(|m| m.key == key) {
        Some(details) => details.name.to_string(),
        None => display_model_key(key),
    }
}
