//! Presentation layer for neuroscreen
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive assessment REPL.

pub mod assessment;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use assessment::AssessmentRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
