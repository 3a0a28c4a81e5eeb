//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod endpoint;
mod output;
mod repl;

pub use endpoint::{DEFAULT_BASE_URL, FileEndpointConfig};
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration values that load but cannot be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("endpoint.base_url must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Query endpoint settings
    pub endpoint: FileEndpointConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let base_url = self.endpoint.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(
                self.endpoint.base_url.clone(),
            ));
        }
        Ok(())
    }
}
