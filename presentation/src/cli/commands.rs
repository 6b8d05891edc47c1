//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for assessment results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored report with model cards, symptoms and next steps
    Full,
    /// JSON output
    Json,
}

impl From<OutputFormat> for neuroscreen_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => neuroscreen_domain::OutputFormat::Full,
            OutputFormat::Json => neuroscreen_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for neuroscreen
#[derive(Parser, Debug)]
#[command(name = "neuroscreen")]
#[command(author, version, about = "Neurological symptom questionnaire with remote prediction")]
#[command(long_about = r#"
neuroscreen walks you through a neurological symptom questionnaire one
question at a time, sends your answers to a prediction service and shows
the predicted condition.

The general assessment predicts a broad disorder category. When that
category has a specialized questionnaire (dementia, headache, vision, ...)
you can continue straight into it.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./neuroscreen.toml       Project-level config
3. ~/.config/neuroscreen/config.toml   Global config

Example:
  neuroscreen
  neuroscreen --assessment headache --previous-diagnosis Headache
  neuroscreen --base-url http://localhost:5000 -o json
"#)]
pub struct Cli {
    /// Assessment to start with (general, dementia, headache, movement,
    /// vision, neurodegenerative, cognitive, seizure, psychomatic)
    #[arg(short, long, value_name = "SLUG", default_value = "general")]
    pub assessment: String,

    /// Diagnosis label that led to this assessment (shown on the welcome screen)
    #[arg(long, value_name = "LABEL")]
    pub previous_diagnosis: Option<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Prediction service base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
