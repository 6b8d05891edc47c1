//! Infrastructure layer for neuroscreen
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileServiceConfig,
};
pub use http::{HttpGatewayError, ReqwestPredictionGateway};
pub use logging::JsonlAssessmentLogger;
