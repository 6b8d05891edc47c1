//! Progress reporting for assessment submission

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use neuroscreen_application::SubmissionProgress;
use neuroscreen_domain::AssessmentId;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while answers are being analyzed
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionProgress for ProgressReporter {
    fn on_submit_start(&self, assessment: AssessmentId) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(assessment.title());
        pb.set_message("Analyzing your answers...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_submit_complete(&self, _assessment: AssessmentId, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if success {
            pb.finish_with_message(format!("{}", "done".green()));
        } else {
            pb.abandon_with_message(format!("{}", "failed".red()));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl SubmissionProgress for SimpleProgress {
    fn on_submit_start(&self, assessment: AssessmentId) {
        eprintln!("{} {}", "->".cyan(), format!("Submitting {}", assessment).bold());
    }

    fn on_submit_complete(&self, assessment: AssessmentId, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), assessment);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), assessment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_submit_start(AssessmentId::General);
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_submit_complete(AssessmentId::General, true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_complete_without_start_is_noop() {
        let reporter = ProgressReporter::new();
        reporter.on_submit_complete(AssessmentId::Vision, false);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
