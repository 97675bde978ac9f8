//! CodeLlama endpoint client.

use super::types::{GenerateRequest, GenerateResponse, ModelInfo};
use crate::config::EndpointConfig;
use crate::http;
use core::time::Duration;
use meridian_models::invocation::InvocationError;

/// HTTP client for the code-generation service.
#[derive(Debug, Clone)]
pub struct CodeLlamaClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl CodeLlamaClient {
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
        let url = format!("{}/api/codellama/generate", self.base_url);
        let mut builder = self.client.post(&url).json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        http::execute(builder).await
    }

    /// Fetches static model information.
    pub async fn model_info(&self) -> Result<ModelInfo, InvocationError> {
        let url = format!("{}/api/codellama/info", self.base_url);
        let mut builder = self.client.get(&url);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        http::execute(builder).await
    }
}
