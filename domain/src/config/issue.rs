//! Configuration issues found while validating a loaded config file.
//!
//! Issues never abort startup; the binary prints them as warnings and
//! continues with the values it has.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `service.base_url` or an endpoint override is not an http(s) URL.
    InvalidUrl,
    /// `service.timeout_secs = 0` would fail every submission.
    ZeroTimeout,
    /// `[endpoints]` names an assessment that does not exist.
    UnknownEndpoint,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }
}
