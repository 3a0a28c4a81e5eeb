//! Query Gateway port
//!
//! Defines the interface for sending a query to the remote endpoint.

use async_trait::async_trait;
use cvchat_domain::{QueryRequest, ResponsePayload};
use thiserror::Error;

/// Errors that can occur while talking to the query endpoint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Network(String),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

/// Gateway for the query endpoint
///
/// One call is one POST of `{"query": ...}`. Implementations must not retry,
/// and must not branch on the HTTP status: any body that parses as a
/// [`ResponsePayload`] is returned as `Ok`.
#[async_trait]
pub trait QueryGateway: Send + Sync {
    /// Send a query and wait for the parsed reply
    async fn send_query(&self, request: &QueryRequest) -> Result<ResponsePayload, GatewayError>;
}
