//! Output formatter trait

use neuroscreen_application::ResultReport;

/// Trait for formatting assessment results
pub trait OutputFormatter {
    /// Format the complete result report
    fn format(&self, report: &ResultReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &ResultReport) -> String;
}
