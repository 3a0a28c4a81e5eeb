//! Configuration file loading for cvchat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CVCHAT_*` environment variables (`CVCHAT_ENDPOINT__BASE_URL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./cvchat.toml` or `./.cvchat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/cvchat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEndpointConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
