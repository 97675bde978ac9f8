//! Mistral RAG endpoint client.

use super::types::{GenerateRequest, GenerateResponse};
use crate::config::EndpointConfig;
use crate::http;
use core::time::Duration;
use meridian_models::invocation::InvocationError;

/// HTTP client for the RAG generation service.
#[derive(Debug, Clone)]
pub struct MistralClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl MistralClient {
    /// Creates a new client for the configured endpoint.
    #[must_use]
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
            timeout: config.timeout,
        }
    }

    /// Sends one generation request to the service.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, InvocationError> {
        let mut builder = self.client.post(&self.base_url).json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        http::execute(builder).await
    }
}
