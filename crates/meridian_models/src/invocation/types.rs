//! Core types for invocation requests and results.

use core::time::Duration;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::descriptor::{ChunkingDefaults, GenerationDefaults};

// ─────────────────────
// Request
// ─────────────────────

/// An invocation request to a model.
///
/// Constructed per call and owned by the issuing adapter; never persisted and
/// never shared across components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// The primary textual input (prompt / query).
    pub prompt: String,
    /// Image payload for vision-capable models.
    pub image: Option<ImagePayload>,
    /// Parameter overrides applied over the descriptor's defaults.
    pub parameters: GenerationParams,
    /// Ordered supplementary strings (retrieval context / conversation history).
    pub context: Vec<String>,
}

impl InvocationRequest {
    /// Creates a new request with a textual prompt.
    ///
    /// # Example
    ///
    /// ```rust
    /// use meridian_models::invocation::InvocationRequest;
    ///
    /// let request = InvocationRequest::new("Summarize the attached report");
    /// ```
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
            parameters: GenerationParams::default(),
            context: Vec::new(),
        }
    }

    /// Attaches an image payload for vision-capable models.
    #[must_use]
    pub fn image(mut self, image: ImagePayload) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the supplementary context strings.
    #[must_use]
    pub fn context(mut self, context: Vec<String>) -> Self {
        self.context = context;
        self
    }

    /// Sets the parameter overrides.
    #[must_use]
    pub fn parameters(mut self, parameters: GenerationParams) -> Self {
        self.parameters = parameters;
        self
    }

    /// Overrides the sampling temperature for this call.
    #[must_use]
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.parameters.temperature = Some(temperature);
        self
    }

    /// Overrides the maximum output length for this call.
    #[must_use]
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.parameters.max_tokens = Some(max_tokens);
        self
    }

    /// Merges this request over the given defaults into the form handed to a
    /// provider. Validation happens before this; merging never fails.
    #[must_use]
    pub(crate) fn resolve(self, model: &str, defaults: &GenerationDefaults) -> ResolvedRequest {
        ResolvedRequest {
            model: model.to_string(),
            prompt: self.prompt,
            image: self.image,
            context: self.context,
            params: self.parameters.resolve(defaults),
        }
    }
}

/// Per-call parameter overrides.
///
/// Every field is optional; absent fields fall back to the descriptor's
/// defaults. Values outside their documented ranges are an
/// [`InvalidRequest`](super::InvocationError::InvalidRequest) error, never
/// silently clamped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Sampling temperature in `[0, 1]`.
    pub temperature: Option<f32>,
    /// Maximum output length in tokens, at least 1.
    pub max_tokens: Option<u32>,
    /// Nucleus sampling probability mass in `(0, 1]`.
    pub top_p: Option<f32>,
    /// Top-k sampling cutoff, at least 1.
    pub top_k: Option<u32>,
    /// Family-specific knobs forwarded opaquely to the provider
    /// (e.g. TTS emotion/intensity).
    pub additional: Option<Value>,
}

impl GenerationParams {
    fn resolve(self, defaults: &GenerationDefaults) -> ResolvedParams {
        ResolvedParams {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            top_p: self.top_p.unwrap_or(defaults.top_p),
            top_k: self.top_k.unwrap_or(defaults.top_k),
            chunking: defaults.chunking.clone(),
            additional: self.additional,
        }
    }
}

/// Image payload for vision-capable models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Base64-encoded image data.
    pub data: String,
    /// The image format.
    pub media_type: ImageMediaType,
}

impl ImagePayload {
    /// Creates an image payload from base64-encoded data.
    #[must_use]
    pub fn base64(data: impl Into<String>, media_type: ImageMediaType) -> Self {
        Self {
            data: data.into(),
            media_type,
        }
    }

    /// Upper bound on the decoded size in bytes, derived from the encoded
    /// length without decoding.
    #[must_use]
    pub fn decoded_len_estimate(&self) -> usize {
        base64::decoded_len_estimate(self.data.len())
    }
}

/// Supported image formats. A model family may support a subset of these.
#[expect(missing_docs, reason = "variants are self-explanatory format names")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageMediaType {
    JPEG,
    PNG,
    GIF,
    WEBP,
}

impl ImageMediaType {
    /// The MIME type used when transmitting the image.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::JPEG => "image/jpeg",
            Self::PNG => "image/png",
            Self::GIF => "image/gif",
            Self::WEBP => "image/webp",
        }
    }
}

// ─────────────────────
// Resolved form
// ─────────────────────

/// A validated request merged over descriptor defaults, as handed to a
/// [`ModelProvider`](super::ModelProvider).
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    /// The registry identifier of the target model.
    pub model: String,
    /// The primary textual input.
    pub prompt: String,
    /// Image payload, present only when the capabilities permit it.
    pub image: Option<ImagePayload>,
    /// Ordered supplementary strings.
    pub context: Vec<String>,
    /// Fully resolved generation parameters.
    pub params: ResolvedParams,
}

/// Generation parameters with every default applied.
#[derive(Debug, Clone)]
pub struct ResolvedParams {
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum output length in tokens.
    pub max_tokens: u32,
    /// Nucleus sampling probability mass.
    pub top_p: f32,
    /// Top-k sampling cutoff.
    pub top_k: u32,
    /// Retrieval chunking configuration, for families that use it.
    pub chunking: Option<ChunkingDefaults>,
    /// Family-specific knobs forwarded opaquely.
    pub additional: Option<Value>,
}

// ─────────────────────
// Result
// ─────────────────────

/// The canonical result envelope, one per completed invocation.
///
/// Wire responses differ per model family; each provider owns one mapping
/// function onto this shape so callers never see wire field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationResult {
    /// The normalized payload, discriminated by model family.
    pub payload: ResultPayload,
    /// Normalized metadata common to all families.
    pub metadata: InvocationMetadata,
}

/// Payload of a completed invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResultPayload {
    /// Free text from text-generation families.
    Text(String),
    /// Generated code from code-generation families.
    Code {
        /// The generated source code.
        code: String,
        /// Language reported by the endpoint, when available.
        language: Option<String>,
    },
    /// Reference to synthesized audio from speech families.
    AudioUrl(String),
}

impl ResultPayload {
    /// Returns the textual content of the payload, if any.
    ///
    /// Text and code payloads return their content; audio payloads return the
    /// URL. This is a convenience for presentation code that renders whatever
    /// came back.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Code { code, .. } => code,
            Self::AudioUrl(url) => url,
        }
    }
}

/// Metadata common to every completed invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvocationMetadata {
    /// Wall-clock processing time reported by the endpoint.
    pub processing_time: Duration,
    /// Token or resource usage count reported by the endpoint.
    pub tokens_used: u64,
    /// Family-specific metadata that has no canonical field (retrieved
    /// document names, device info, billing units).
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> GenerationDefaults {
        GenerationDefaults {
            temperature: 0.7,
            max_tokens: 2048,
            top_p: 0.95,
            top_k: 50,
            chunking: Some(ChunkingDefaults {
                chunk_size: 512,
                overlap: 50,
                similarity_threshold: 0.7,
            }),
        }
    }

    #[test]
    fn overrides_take_precedence_over_defaults() {
        let request = InvocationRequest::new("hello")
            .temperature(0.2)
            .max_tokens(64);

        let resolved = request.resolve("mistral", &defaults());

        assert_eq!(resolved.model, "mistral");
        assert_eq!(resolved.params.temperature, 0.2);
        assert_eq!(resolved.params.max_tokens, 64);
        // Untouched fields fall back to the descriptor defaults.
        assert_eq!(resolved.params.top_p, 0.95);
        assert_eq!(resolved.params.top_k, 50);
        assert_eq!(resolved.params.chunking.as_ref().unwrap().chunk_size, 512);
    }

    #[test]
    fn context_and_prompt_carry_through_unchanged() {
        let request = InvocationRequest::new("question")
            .context(vec!["doc one".to_string(), "doc two".to_string()]);

        let resolved = request.resolve("mistral", &defaults());

        assert_eq!(resolved.prompt, "question");
        assert_eq!(resolved.context, vec!["doc one", "doc two"]);
    }

    #[test]
    fn every_payload_kind_has_a_textual_view() {
        assert_eq!(ResultPayload::Text("answer".to_string()).as_str(), "answer");
        assert_eq!(
            ResultPayload::Code {
                code: "fn main() {}".to_string(),
                language: Some("rust".to_string()),
            }
            .as_str(),
            "fn main() {}"
        );
        assert_eq!(
            ResultPayload::AudioUrl("https://cdn.example/42.wav".to_string()).as_str(),
            "https://cdn.example/42.wav"
        );
    }

    #[test]
    fn media_types_map_onto_their_mime_strings() {
        assert_eq!(ImageMediaType::JPEG.mime_type(), "image/jpeg");
        assert_eq!(ImageMediaType::PNG.mime_type(), "image/png");
        assert_eq!(ImageMediaType::GIF.mime_type(), "image/gif");
        assert_eq!(ImageMediaType::WEBP.mime_type(), "image/webp");
    }

    #[test]
    fn decoded_len_estimate_bounds_payload_size() {
        // "ABCDEFGH" encoded: 12 base64 chars, 8 decoded bytes.
        let payload = ImagePayload::base64("QUJDREVGR0g=", ImageMediaType::PNG);
        assert!(payload.decoded_len_estimate() >= 8);
        assert!(payload.decoded_len_estimate() <= 10);
    }
}
