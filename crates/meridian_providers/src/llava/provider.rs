//! LLaVA [`ModelProvider`] implementation.

use super::types::{ParametersField, VisionResponse};
use crate::config::EndpointConfig;
use crate::http;
use async_trait::async_trait;
use base64::Engine as _;
use core::time::Duration;
use meridian_models::invocation::{
    ImageMediaType, ImagePayload, InvocationError, InvocationMetadata, InvocationResult,
    ModelProvider, ResolvedRequest, ResultPayload,
};
use reqwest::multipart::{Form, Part};
use std::io::Cursor;

/// Edge length of the square resolution images are normalized to.
const IMAGE_EDGE: u32 = 336;

/// LLaVA [`ModelProvider`] implementation.
#[derive(Debug, Clone)]
pub struct LlavaProvider {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl LlavaProvider {
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
impl ModelProvider for LlavaProvider {
    async fn invoke(&self, request: ResolvedRequest) -> Result<InvocationResult, InvocationError> {
        tracing::debug!(
            model = %request.model,
            has_image = request.image.is_some(),
            "dispatching vision generation request"
        );

        let form = build_form(request)?;
        let mut builder = self.client.post(&self.base_url).multipart(form);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response: VisionResponse = http::execute(builder).await?;
        Ok(convert_response(response))
    }
}

fn build_form(request: ResolvedRequest) -> Result<Form, InvocationError> {
    let parameters = ParametersField {
        temperature: request.params.temperature,
        max_tokens: request.params.max_tokens,
        top_p: request.params.top_p,
        top_k: request.params.top_k,
    };
    let parameters_json = serde_json::to_string(&parameters)
        .map_err(|err| InvocationError::InvalidRequest(err.to_string()))?;

    let mut form = Form::new()
        .text("prompt", request.prompt)
        .text("parameters", parameters_json);

    if let Some(payload) = request.image {
        // Normalization always re-encodes to PNG, whatever the input format.
        let normalized = prepare_image(&payload)?;
        let part = Part::bytes(normalized)
            .file_name("image.png")
            .mime_str(ImageMediaType::PNG.mime_type())
            .map_err(|err| InvocationError::InvalidRequest(err.to_string()))?;
        form = form.part("image", part);
    }

    Ok(form)
}

/// Decodes the payload and normalizes it to a fixed PNG square before
/// transmission, as the vision service expects.
fn prepare_image(payload: &ImagePayload) -> Result<Vec<u8>, InvocationError> {
    let invalid = |message: String| InvocationError::InvalidRequest(message);

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(&payload.data)
        .map_err(|err| invalid(format!("image payload is not valid base64: {err}")))?;

    let decoded = image::load_from_memory(&bytes)
        .map_err(|err| invalid(format!("image payload could not be decoded: {err}")))?;

    let resized = decoded.resize_exact(IMAGE_EDGE, IMAGE_EDGE, image::imageops::FilterType::Triangle);

    let mut buffer = Cursor::new(Vec::new());
    resized
        .write_to(&mut buffer, image::ImageFormat::Png)
        .map_err(|err| invalid(format!("failed to encode normalized image: {err}")))?;
    Ok(buffer.into_inner())
}

fn convert_response(response: VisionResponse) -> InvocationResult {
    InvocationResult {
        payload: ResultPayload::Text(response.response),
        metadata: InvocationMetadata {
            processing_time: Duration::from_secs_f64(response.generation_time),
            tokens_used: response.tokens,
            extra: serde_json::Map::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small 10x10 red PNG image encoded as base64.
    const RED_SQUARE_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAoAAAAKCAIAAAACUFjqAAAAEklEQVR4nGP4z8CAB+GTG8HSALfKY52fTcuYAAAAAElFTkSuQmCC";

    #[test]
    fn images_are_normalized_to_the_fixed_square_resolution() {
        let payload = ImagePayload::base64(RED_SQUARE_PNG_BASE64, ImageMediaType::PNG);

        let normalized = prepare_image(&payload).expect("valid PNG should normalize");

        let round_trip = image::load_from_memory(&normalized).expect("output should be valid PNG");
        assert_eq!(round_trip.width(), IMAGE_EDGE);
        assert_eq!(round_trip.height(), IMAGE_EDGE);
    }

    #[test]
    fn garbage_base64_is_an_invalid_request() {
        let payload = ImagePayload::base64("not base64!!!", ImageMediaType::PNG);
        let err = prepare_image(&payload).expect_err("garbage must be rejected");
        assert!(matches!(err, InvocationError::InvalidRequest(_)));
    }

    #[test]
    fn valid_base64_of_non_image_bytes_is_an_invalid_request() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(b"plain text bytes");
        let payload = ImagePayload::base64(encoded, ImageMediaType::PNG);
        let err = prepare_image(&payload).expect_err("non-image bytes must be rejected");
        assert!(matches!(err, InvocationError::InvalidRequest(_)));
    }

    #[test]
    fn response_maps_generation_time_onto_processing_time() {
        let body = serde_json::json!({
            "response": "A red square on a white background.",
            "generation_time": 1.5,
            "tokens": 64
        });
        let response: VisionResponse = serde_json::from_value(body).unwrap();

        let result = convert_response(response);
        assert_eq!(
            result.payload,
            ResultPayload::Text("A red square on a white background.".to_string())
        );
        assert_eq!(result.metadata.processing_time, Duration::from_secs_f64(1.5));
        assert_eq!(result.metadata.tokens_used, 64);
    }

    #[test]
    fn timing_fields_default_when_the_service_omits_them() {
        let body = serde_json::json!({ "response": "answer" });
        let response: VisionResponse = serde_json::from_value(body).unwrap();

        let result = convert_response(response);
        assert_eq!(result.metadata.processing_time, Duration::ZERO);
        assert_eq!(result.metadata.tokens_used, 0);
    }
}
