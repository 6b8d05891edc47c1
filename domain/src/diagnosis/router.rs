//! Diagnosis → follow-up assessment routing
//!
//! A diagnosis label from the generic intake is lower-cased and matched
//! against [`ROUTING_TABLE`] by substring, in declared order. The first
//! keyword found decides the follow-up; the order is a contract, so
//! "Mixed Cognitive Disorder" routes on "cognitive disorder" even though a
//! later keyword might also be present.

use crate::assessment::AssessmentId;
use serde::Serialize;

/// Keyword → assessment pairs, scanned top to bottom
pub const ROUTING_TABLE: [(&str, AssessmentId); 8] = [
    ("movement disorder", AssessmentId::Movement),
    ("dementia", AssessmentId::Dementia),
    ("neurogenerative disorder", AssessmentId::Neurodegenerative),
    ("cognitive disorder", AssessmentId::Cognitive),
    ("headache", AssessmentId::Headache),
    ("seizure disorder", AssessmentId::Seizure),
    ("psychomatic disorder", AssessmentId::Psychomatic),
    ("vision disorder", AssessmentId::Vision),
];

const NO_DISORDER: &str = "no disorder";

/// Why a label did or did not produce a follow-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RoutingDecision {
    /// A keyword matched
    FollowUp {
        assessment: AssessmentId,
        keyword: &'static str,
    },
    /// The label explicitly reports no disorder
    NoDisorder,
    /// Nothing matched
    Unmatched,
}

impl RoutingDecision {
    pub fn assessment(&self) -> Option<AssessmentId> {
        match self {
            RoutingDecision::FollowUp { assessment, .. } => Some(*assessment),
            _ => None,
        }
    }
}

/// Stateless label router
pub struct DiagnosisRouter;

impl DiagnosisRouter {
    /// Specialized assessment to run next for `label`, if any
    pub fn route(label: &str) -> Option<AssessmentId> {
        Self::decide(label).assessment()
    }

    /// Like [`route`](Self::route) but reports why nothing matched
    pub fn decide(label: &str) -> RoutingDecision {
        let needle = label.to_lowercase();
        if let Some((keyword, assessment)) = ROUTING_TABLE
            .iter()
            .find(|(keyword, _)| needle.contains(keyword))
        {
            return RoutingDecision::FollowUp {
                assessment: *assessment,
                keyword,
            };
        }
        if needle.contains(NO_DISORDER) {
            RoutingDecision::NoDisorder
        } else {
            RoutingDecision::Unmatched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order_decides() {
        assert_eq!(
            DiagnosisRouter::route("Mixed Cognitive Disorder"),
            Some(AssessmentId::Cognitive)
        );
        // "movement disorder" is declared before "dementia"
        assert_eq!(
            DiagnosisRouter::route("Dementia with Movement Disorder"),
            Some(AssessmentId::Movement)
        );
    }

    #[test]
    fn test_every_keyword_routes() {
        for (keyword, expected) in ROUTING_TABLE {
            let label = keyword.to_uppercase();
            assert_eq!(DiagnosisRouter::route(&label), Some(expected), "{label}");
        }
    }

    #[test]
    fn test_generic_labels() {
        assert_eq!(DiagnosisRouter::route("Headache"), Some(AssessmentId::Headache));
        assert_eq!(
            DiagnosisRouter::route("Neurogenerative Disorder"),
            Some(AssessmentId::Neurodegenerative)
        );
        assert_eq!(
            DiagnosisRouter::route("Vision Disorder"),
            Some(AssessmentId::Vision)
        );
    }

    #[test]
    fn test_no_disorder() {
        assert_eq!(DiagnosisRouter::decide("No Disorder"), RoutingDecision::NoDisorder);
        assert_eq!(DiagnosisRouter::route("No Disorder"), None);
    }

    #[test]
    fn test_unmatched() {
        assert_eq!(DiagnosisRouter::decide("Migraine"), RoutingDecision::Unmatched);
        assert_eq!(DiagnosisRouter::decide(""), RoutingDecision::Unmatched);
    }

    #[test]
    fn test_decision_carries_keyword() {
        assert_eq!(
            DiagnosisRouter::decide("Seizure Disorder"),
            RoutingDecision::FollowUp {
                assessment: AssessmentId::Seizure,
                keyword: "seizure disorder",
            }
        );
    }
}
