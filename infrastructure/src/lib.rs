//! Infrastructure layer for cvchat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEndpointConfig, FileOutputConfig,
    FileReplConfig,
};
pub use http::{HttpQueryGateway, query_url};
