//! CodeLlama [`ModelProvider`] implementation.

use super::client::CodeLlamaClient;
use super::types::{GenerateRequest, GenerateResponse, ModelInfo, SamplingParams};
use crate::config::EndpointConfig;
use async_trait::async_trait;
use core::time::Duration;
use meridian_models::invocation::{
    InvocationError, InvocationMetadata, InvocationResult, ModelProvider, ResolvedRequest,
    ResultPayload,
};

/// CodeLlama [`ModelProvider`] implementation.
#[derive(Debug, Clone)]
pub struct CodeLlamaProvider {
    client: CodeLlamaClient,
}

impl CodeLlamaProvider {
    /// Creates a new provider for the configured endpoint.
    #[must_use]
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            client: CodeLlamaClient::new(config),
        }
    }

    /// Fetches static model information from the service.
    ///
    /// This is outside the invocation flow and does not touch adapter state.
    ///
    /// # Errors
    ///
    /// Returns an [`InvocationError`] on transport, status, or shape failure.
    pub async fn model_info(&self) -> Result<ModelInfo, InvocationError> {
        self.client.model_info().await
    }
}

#[async_trait]
impl ModelProvider for CodeLlamaProvider {
    async fn invoke(&self, request: ResolvedRequest) -> Result<InvocationResult, InvocationError> {
        tracing::debug!(model = %request.model, "dispatching code generation request");

        let wire_request = convert_request(request);
        let response = self.client.generate(&wire_request).await?;

        Ok(convert_response(response))
    }
}

fn convert_request(request: ResolvedRequest) -> GenerateRequest {
    GenerateRequest {
        prompt: request.prompt,
        parameters: SamplingParams {
            temperature: request.params.temperature,
            max_tokens: request.params.max_tokens,
            top_p: request.params.top_p,
            top_k: request.params.top_k,
        },
    }
}

fn convert_response(response: GenerateResponse) -> InvocationResult {
    InvocationResult {
        payload: ResultPayload::Code {
            code: response.generated_code,
            language: response.language,
        },
        metadata: InvocationMetadata {
            processing_time: Duration::from_secs_f64(response.processing_time),
            tokens_used: response.usage.total_tokens,
            extra: serde_json::Map::new(),
        },
    }
}
