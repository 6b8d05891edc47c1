//! Application-level configuration.
//!
//! - [`EndpointConfig`] - which URL each assessment is submitted to

pub mod endpoints;

pub use endpoints::{DEFAULT_BASE_URL, EndpointConfig, default_path};
