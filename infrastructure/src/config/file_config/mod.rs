//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod output;
mod service;

pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use service::FileServiceConfig;

use neuroscreen_application::EndpointConfig;
use neuroscreen_domain::{AssessmentId, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Prediction service connection
    pub service: FileServiceConfig,
    /// Per-assessment path or URL overrides, keyed by slug
    pub endpoints: BTreeMap<String, String>,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. `service.base_url` is an http(s) URL
    /// 2. `service.timeout_secs` is non-zero
    /// 3. Every `[endpoints]` key names an assessment, and absolute
    ///    overrides are http(s) URLs
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !is_http_url(&self.service.base_url) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidUrl,
                format!(
                    "service.base_url: '{}' is not an http(s) URL",
                    self.service.base_url
                ),
            ));
        }

        if self.service.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroTimeout,
                "service.timeout_secs is 0; every submission will time out immediately",
            ));
        }

        for (slug, target) in &self.endpoints {
            if slug.parse::<AssessmentId>().is_err() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownEndpoint,
                    format!("endpoints.{slug}: unknown assessment, entry ignored"),
                ));
            } else if target.contains("://") && !is_http_url(target) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidUrl,
                    format!("endpoints.{slug}: '{target}' is not an http(s) URL"),
                ));
            }
        }

        issues
    }

    /// Endpoint table for the application layer
    ///
    /// Entries with unknown slugs are skipped (reported by [`validate`](Self::validate)).
    pub fn to_endpoint_config(&self) -> EndpointConfig {
        self.endpoints
            .iter()
            .filter_map(|(slug, target)| slug.parse::<AssessmentId>().ok().map(|id| (id, target)))
            .fold(
                EndpointConfig::new(self.service.base_url.clone()),
                |config, (id, target)| config.with_override(id, target.clone()),
            )
    }
}

fn is_http_url(s: &str) -> bool {
    match reqwest::Url::parse(s) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
