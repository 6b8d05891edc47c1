//! Assessment identifiers

use crate::core::error::DomainError;
use crate::diagnosis::vote::{GENERIC_MODELS, ModelTriplet, SPECIALIZED_MODELS};
use crate::questionnaire::QuestionSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One questionnaire domain
///
/// `General` is the symptom intake every session starts with; the others
/// are specialized follow-ups chosen by the
/// [`DiagnosisRouter`](crate::DiagnosisRouter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentId {
    General,
    Dementia,
    Headache,
    Movement,
    Vision,
    Neurodegenerative,
    Cognitive,
    Seizure,
    Psychomatic,
}

impl AssessmentId {
    pub const ALL: [AssessmentId; 9] = [
        AssessmentId::General,
        AssessmentId::Dementia,
        AssessmentId::Headache,
        AssessmentId::Movement,
        AssessmentId::Vision,
        AssessmentId::Neurodegenerative,
        AssessmentId::Cognitive,
        AssessmentId::Seizure,
        AssessmentId::Psychomatic,
    ];

    /// Stable lowercase identifier used in config files and on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            AssessmentId::General => "general",
            AssessmentId::Dementia => "dementia",
            AssessmentId::Headache => "headache",
            AssessmentId::Movement => "movement",
            AssessmentId::Vision => "vision",
            AssessmentId::Neurodegenerative => "neurodegenerative",
            AssessmentId::Cognitive => "cognitive",
            AssessmentId::Seizure => "seizure",
            AssessmentId::Psychomatic => "psychomatic",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AssessmentId::General => "Neurological Symptom Assessment",
            AssessmentId::Dementia => "Dementia Assessment",
            AssessmentId::Headache => "Headache Assessment",
            AssessmentId::Movement => "Movement Disorder Assessment",
            AssessmentId::Vision => "Vision Disorder Assessment",
            AssessmentId::Neurodegenerative => "Neurodegenerative Disorder Assessment",
            AssessmentId::Cognitive => "Cognitive Disorder Assessment",
            AssessmentId::Seizure => "Seizure Disorder Assessment",
            AssessmentId::Psychomatic => "Psychomatic Disorder Assessment",
        }
    }

    pub fn is_specialized(&self) -> bool {
        !matches!(self, AssessmentId::General)
    }

    /// Fresh copy of the built-in question set
    pub fn question_set(&self) -> QuestionSet {
        super::question_sets::question_set(*self)
    }

    /// Model keys the prediction service answers with, in voting order
    pub fn models(&self) -> &'static ModelTriplet {
        if self.is_specialized() {
            &SPECIALIZED_MODELS
        } else {
            &GENERIC_MODELS
        }
    }

    /// Conditions this assessment screens for (shown on the welcome screen)
    pub fn condition_types(&self) -> &'static [&'static str] {
        match self {
            AssessmentId::General => &[
                "Movement Disorder",
                "Dementia",
                "Neurogenerative Disorder",
                "Cognitive Disorder",
                "Headache",
                "Seizure Disorder",
                "Psychomatic Disorder",
                "Vision Disorder",
            ],
            AssessmentId::Dementia => &[
                "Alzheimer's Disease",
                "Vascular Dementia",
                "Lewy Body Dementia",
                "Frontotemporal Dementia",
                "Mixed Dementia",
                "Parkinson's Dementia",
            ],
            AssessmentId::Headache => &[
                "Cluster",
                "Medication Overuse",
                "Migraine",
                "New Daily Persistent",
                "Post-Traumatic",
                "Tension-Type",
            ],
            AssessmentId::Movement => &[
                "Essential Tremor",
                "Dystonia",
                "Ataxia",
                "Tourette Syndrome",
                "Restless Legs Syndrome",
            ],
            AssessmentId::Vision => &[
                "Glaucoma",
                "Macular Degeneration",
                "Retinitis Pigmentosa",
                "Diabetic Retinopathy",
                "Optic Neuritis",
                "Retinal Detachment",
                "Ocular Migraine",
            ],
            AssessmentId::Neurodegenerative => &[
                "Parkinson's Disease",
                "Alzheimer's Disease",
                "Lewy Body Dementia",
                "Huntington's Disease",
                "Multiple System Atrophy",
                "Progressive Supranuclear Palsy",
                "Frontotemporal Dementia",
            ],
            AssessmentId::Cognitive => &[
                "Mild Cognitive Impairment (MCI)",
                "Amnestic Syndrome",
                "TBI-related Cognitive Disorder",
                "Substance-Induced Cognitive Disorder",
                "Frontal Lobe Syndrome",
                "Wernicke-Korsakoff Syndrome",
            ],
            AssessmentId::Seizure => &[
                "Focal Aware",
                "Focal Impaired Awareness",
                "Absence",
                "Tonic-Clonic",
                "Myoclonic",
            ],
            AssessmentId::Psychomatic => &[
                "Somatic Symptom Disorder",
                "Conversion Disorder",
                "Illness Anxiety Disorder",
                "Functional Neurological Disorder",
            ],
        }
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for AssessmentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        match needle.as_str() {
            "generic" | "intake" => return Ok(AssessmentId::General),
            "neuro" | "neurodegeneration" => return Ok(AssessmentId::Neurodegenerative),
            "psychosomatic" => return Ok(AssessmentId::Psychomatic),
            _ => {}
        }
        AssessmentId::ALL
            .into_iter()
            .find(|id| id.slug() == needle)
            .ok_or_else(|| DomainError::UnknownAssessment(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        for id in AssessmentId::ALL {
            assert_eq!(id.slug().parse::<AssessmentId>().unwrap(), id);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Generic".parse::<AssessmentId>().unwrap(), AssessmentId::General);
        assert_eq!("neuro".parse::<AssessmentId>().unwrap(), AssessmentId::Neurodegenerative);
        assert!(matches!(
            "cardiology".parse::<AssessmentId>(),
            Err(DomainError::UnknownAssessment(_))
        ));
    }

    #[test]
    fn test_model_triplets() {
        assert_eq!(AssessmentId::General.models(), &["GB", "RF", "SVM"]);
        assert_eq!(
            AssessmentId::Headache.models()[0],
            "Gradient_Boosting_Prediction"
        );
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&AssessmentId::Neurodegenerative).unwrap();
        assert_eq!(json, "\"neurodegenerative\"");
    }

    #[test]
    fn test_only_general_is_unspecialized() {
        let generic: Vec<_> = AssessmentId::ALL
            .into_iter()
            .filter(|id| !id.is_specialized())
            .collect();
        assert_eq!(generic, vec![AssessmentId::General]);
    }
}
