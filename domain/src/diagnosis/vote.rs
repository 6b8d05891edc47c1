//! Primary diagnosis selection
//!
//! Three models vote on a label. The winner is the result of a leftmost
//! reduction in which the running candidate is kept while its vote count is
//! at least the challenger's, so earlier models win ties.

use super::prediction::PredictionResult;
use serde::Serialize;

/// Model keys an assessment's predictions are read from, in voting order
pub type ModelTriplet = [&'static str; 3];

/// Keys returned by the generic intake endpoint
pub const GENERIC_MODELS: ModelTriplet = ["GB", "RF", "SVM"];

/// Keys returned by every specialized endpoint
pub const SPECIALIZED_MODELS: ModelTriplet = [
    "Gradient_Boosting_Prediction",
    "Random_Forest_Prediction",
    "SVM_Prediction",
];

/// Pick the primary label from `predictions`
///
/// Models absent from the result are skipped. Returns `None` when none of
/// the three is present.
pub fn select_primary(predictions: &PredictionResult, models: &ModelTriplet) -> Option<String> {
    let labels: Vec<&str> = models.iter().filter_map(|m| predictions.get(m)).collect();
    let count = |label: &str| labels.iter().filter(|l| **l == label).count();

    labels
        .iter()
        .copied()
        .reduce(|a, b| if count(a) >= count(b) { a } else { b })
        .map(str::to_string)
}

/// Outcome of the model vote with per-model detail
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisVote {
    /// Winning label, if any model answered
    pub primary: Option<String>,
    /// Number of models agreeing with `primary`
    pub agreeing: usize,
    /// Number of models that returned a label
    pub total_votes: usize,
    /// (model key, label) in voting order; missing models are left out
    pub votes: Vec<(String, String)>,
}

impl DiagnosisVote {
    pub fn tally(predictions: &PredictionResult, models: &ModelTriplet) -> Self {
        let votes: Vec<(String, String)> = models
            .iter()
            .filter_map(|m| predictions.get(m).map(|l| (m.to_string(), l.to_string())))
            .collect();
        let primary = select_primary(predictions, models);
        let agreeing = primary
            .as_deref()
            .map(|p| votes.iter().filter(|(_, l)| l == p).count())
            .unwrap_or(0);

        Self {
            primary,
            agreeing,
            total_votes: votes.len(),
            votes,
        }
    }

    /// Check if every model that answered agreed
    pub fn is_unanimous(&self) -> bool {
        self.total_votes > 0 && self.agreeing == self.total_votes
    }

    /// Generate a visual agreement summary (e.g., "[●●○]")
    pub fn vote_summary(&self) -> String {
        let mut summary = String::from("[");
        for (_, label) in &self.votes {
            let agrees = self.primary.as_deref() == Some(label.as_str());
            summary.push(if agrees { '●' } else { '○' });
        }
        summary.push(']');
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic(gb: &str, rf: &str, svm: &str) -> PredictionResult {
        [("GB", gb), ("RF", rf), ("SVM", svm)].into_iter().collect()
    }

    #[test]
    fn test_majority_wins() {
        let p = generic("A", "A", "B");
        assert_eq!(select_primary(&p, &GENERIC_MODELS).as_deref(), Some("A"));
    }

    #[test]
    fn test_majority_in_later_models() {
        let p = generic("B", "A", "A");
        assert_eq!(select_primary(&p, &GENERIC_MODELS).as_deref(), Some("A"));
    }

    #[test]
    fn test_all_different_first_wins() {
        let p = generic("A", "B", "C");
        assert_eq!(select_primary(&p, &GENERIC_MODELS).as_deref(), Some("A"));
    }

    #[test]
    fn test_missing_models_are_skipped() {
        let p: PredictionResult = [("RF", "Cluster"), ("SVM", "Migraine")].into_iter().collect();
        assert_eq!(
            select_primary(&p, &GENERIC_MODELS).as_deref(),
            Some("Cluster")
        );
    }

    #[test]
    fn test_none_present() {
        let p: PredictionResult = [("XGB", "Cluster")].into_iter().collect();
        assert_eq!(select_primary(&p, &GENERIC_MODELS), None);
        assert_eq!(select_primary(&PredictionResult::default(), &SPECIALIZED_MODELS), None);
    }

    #[test]
    fn test_specialized_keys() {
        let p: PredictionResult = [
            ("Gradient_Boosting_Prediction", "Absence"),
            ("Random_Forest_Prediction", "Myoclonic"),
            ("SVM_Prediction", "Myoclonic"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            select_primary(&p, &SPECIALIZED_MODELS).as_deref(),
            Some("Myoclonic")
        );
    }

    #[test]
    fn test_tally() {
        let vote = DiagnosisVote::tally(&generic("A", "A", "B"), &GENERIC_MODELS);
        assert_eq!(vote.primary.as_deref(), Some("A"));
        assert_eq!(vote.agreeing, 2);
        assert_eq!(vote.total_votes, 3);
        assert!(!vote.is_unanimous());
        assert_eq!(vote.vote_summary(), "[●●○]");

        let unanimous = DiagnosisVote::tally(&generic("A", "A", "A"), &GENERIC_MODELS);
        assert!(unanimous.is_unanimous());

        let empty = DiagnosisVote::tally(&PredictionResult::default(), &GENERIC_MODELS);
        assert!(!empty.is_unanimous());
        assert_eq!(empty.vote_summary(), "[]");
    }
}
