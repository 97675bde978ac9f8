//! EmotiVoice [`ModelProvider`] implementation.

use super::types::{SynthesisRequest, SynthesisResponse, VoiceOptions};
use crate::config::EndpointConfig;
use crate::http;
use async_trait::async_trait;
use core::time::Duration;
use meridian_models::invocation::{
    InvocationError, InvocationMetadata, InvocationResult, ModelProvider, ResolvedRequest,
    ResultPayload,
};

/// EmotiVoice [`ModelProvider`] implementation.
#[derive(Debug, Clone)]
pub struct EmotiVoiceProvider {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl EmotiVoiceProvider {
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
impl ModelProvider for EmotiVoiceProvider {
    async fn invoke(&self, request: ResolvedRequest) -> Result<InvocationResult, InvocationError> {
        tracing::debug!(model = %request.model, "dispatching speech synthesis request");

        let wire_request = convert_request(request)?;
        let mut builder = self.client.post(&self.base_url).json(&wire_request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response: SynthesisResponse = http::execute(builder).await?;
        Ok(convert_response(response))
    }
}

fn convert_request(request: ResolvedRequest) -> Result<SynthesisRequest, InvocationError> {
    let options = match request.params.additional {
        Some(value) => serde_json::from_value::<VoiceOptions>(value).map_err(|err| {
            InvocationError::InvalidRequest(format!("invalid voice options: {err}"))
        })?,
        None => VoiceOptions::default(),
    };

    Ok(SynthesisRequest {
        text: request.prompt,
        emotion: options.emotion,
        intensity: options.intensity,
    })
}

fn convert_response(response: SynthesisResponse) -> InvocationResult {
    InvocationResult {
        payload: ResultPayload::AudioUrl(response.audio_url),
        metadata: InvocationMetadata {
            processing_time: Duration::from_secs_f64(response.processing_time),
            tokens_used: response.characters_billed,
            extra: serde_json::Map::new(),
        },
    }
}
