//! Error types for the HTTP adapter

use thiserror::Error;

/// Errors that can occur while setting up the HTTP gateway
#[derive(Error, Debug)]
pub enum HttpGatewayError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
