//! Query Gateway over HTTP

use async_trait::async_trait;
use cvchat_application::ports::query_gateway::{GatewayError, QueryGateway};
use cvchat_domain::{QUERY_PATH, QueryRequest, ResponsePayload};
use tracing::{debug, info};

/// Build the full query URL from a base URL.
///
/// A trailing slash on the base is ignored, so `http://host/` and
/// `http://host` both yield `http://host/api/query`.
pub fn query_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), QUERY_PATH)
}

/// Gateway that POSTs queries as JSON to `<base_url>/api/query`
pub struct HttpQueryGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpQueryGateway {
    /// Create a gateway with a fresh client
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a gateway sharing an existing client
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        let url = query_url(base_url);
        info!("HttpQueryGateway targeting {}", url);
        Self { client, url }
    }

    /// Get the full endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QueryGateway for HttpQueryGateway {
    async fn send_query(&self, request: &QueryRequest) -> Result<ResponsePayload, GatewayError> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(format!("Failed to reach {}: {}", self.url, e)))?;

        // The status is only reported; a JSON body is accepted whatever it is.
        let status = response.status();
        debug!("Query endpoint answered HTTP {}", status.as_u16());

        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Network(format!("Failed to read response body: {}", e)))?;

        serde_json::from_slice(&body).map_err(|e| {
            GatewayError::InvalidBody(format!("{} (HTTP {}, {} bytes)", e, status.as_u16(), body.len()))
        })
    }
}
