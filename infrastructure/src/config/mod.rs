//! Configuration file loading for neuroscreen
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./neuroscreen.toml` or `./.neuroscreen.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/neuroscreen/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileServiceConfig,
};
pub use loader::ConfigLoader;
