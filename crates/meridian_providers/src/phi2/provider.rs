//! Phi-2 [`ModelProvider`] implementation.

use super::types::{GenerateRequest, GenerateResponse, SamplingParams};
use crate::config::EndpointConfig;
use crate::http;
use async_trait::async_trait;
use core::time::Duration;
use meridian_models::invocation::{
    InvocationError, InvocationMetadata, InvocationResult, ModelProvider, ResolvedRequest,
    ResultPayload,
};

/// Phi-2 [`ModelProvider`] implementation.
#[derive(Debug, Clone)]
pub struct Phi2Provider {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl Phi2Provider {
    /// Creates a new provider for the configured endpoint.
    #[must_use]
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
            timeout: config.timeout,
        }
    }
}

#[async_trait]
impl ModelProvider for Phi2Provider {
    async fn invoke(&self, request: ResolvedRequest) -> Result<InvocationResult, InvocationError> {
        tracing::debug!(model = %request.model, "dispatching text generation request");

        let wire_request = convert_request(request);
        let mut builder = self.client.post(&self.base_url).json(&wire_request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response: GenerateResponse = http::execute(builder).await?;
        Ok(convert_response(response))
    }
}

fn convert_request(request: ResolvedRequest) -> GenerateRequest {
    GenerateRequest {
        prompt: request.prompt,
        parameters: SamplingParams {
            temperature: request.params.temperature,
            max_length: request.params.max_tokens,
            top_k: request.params.top_k,
        },
    }
}

fn convert_response(response: GenerateResponse) -> InvocationResult {
    let mut extra = serde_json::Map::new();
    if let Some(device) = response.device {
        extra.insert("device".to_string(), device.into());
    }

    InvocationResult {
        payload: ResultPayload::Text(response.generated_text),
        metadata: InvocationMetadata {
            processing_time: Duration::from_secs_f64(response.generation_time),
            tokens_used: response.token_count,
            extra,
        },
    }
}
