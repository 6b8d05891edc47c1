//! CLI entrypoint for neuroscreen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use neuroscreen_application::RunAssessmentUseCase;
use neuroscreen_domain::{AssessmentId, Severity};
use neuroscreen_infrastructure::{ConfigLoader, JsonlAssessmentLogger, ReqwestPredictionGateway};
use neuroscreen_presentation::{AssessmentRepl, Cli, ConsoleFormatter, OutputConfig, ReplConfig};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if let Some(base_url) = &cli.base_url {
        config.service.base_url = base_url.clone();
    }

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => eprintln!("error: {}", issue.message),
            Severity::Warning => eprintln!("warning: {}", issue.message),
        }
    }

    let assessment: AssessmentId = cli.assessment.parse()?;

    info!("Starting neuroscreen ({} assessment)", assessment);

    // === Dependency Injection ===
    let gateway = Arc::new(ReqwestPredictionGateway::new(
        config.service.timeout(),
        &config.service.user_agent,
    )?);

    let mut use_case = RunAssessmentUseCase::new(gateway, config.to_endpoint_config());

    if let Some(path) = &config.logging.transcript {
        match JsonlAssessmentLogger::new(path) {
            Some(logger) => {
                info!("Writing assessment transcript to {}", logger.path().display());
                use_case = use_case.with_assessment_logger(Arc::new(logger));
            }
            None => warn!("Transcript disabled; could not open {}", path),
        }
    }

    // CLI flag wins over the config file
    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
    };
    if !output.color {
        ConsoleFormatter::disable_color();
    }

    let repl_config = ReplConfig {
        show_progress: !cli.quiet,
        ..ReplConfig::default()
    };

    AssessmentRepl::new(use_case)
        .with_output(output)
        .with_repl_config(repl_config)
        .run(assessment, cli.previous_diagnosis)
        .await?;

    Ok(())
}
