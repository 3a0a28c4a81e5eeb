//! Endpoint configuration from TOML (`[endpoint]` section)

use serde::{Deserialize, Serialize};

/// Flask's development server address, where the query endpoint usually lives.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Scheme, host and port of the server; `/api/query` is appended
    pub base_url: String,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
