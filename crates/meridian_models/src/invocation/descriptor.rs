//! Static model descriptors.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::provider::ModelProvider;

/// Static record describing how to invoke one named remote model.
///
/// Descriptors are constructed once at process start, registered with the
/// [`ModelRegistry`](crate::ModelRegistry), and are read-only for the process
/// lifetime.
#[derive(Clone)]
pub struct ModelDescriptor {
    id: String,
    provider: Arc<dyn ModelProvider>,
    defaults: GenerationDefaults,
    capabilities: Capabilities,
    limits: InputLimits,
}

impl ModelDescriptor {
    /// Creates a descriptor with text-only capabilities and default limits.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        provider: Arc<dyn ModelProvider>,
        defaults: GenerationDefaults,
    ) -> Self {
        Self {
            id: id.into(),
            provider,
            defaults,
            capabilities: Capabilities::default(),
            limits: InputLimits::default(),
        }
    }

    /// Sets the accepted input modalities.
    #[must_use]
    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Sets the input limits.
    #[must_use]
    pub fn limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The unique registry identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The invocation capability for this model.
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn ModelProvider> {
        &self.provider
    }

    /// Default generation parameters.
    #[must_use]
    pub fn defaults(&self) -> &GenerationDefaults {
        &self.defaults
    }

    /// Accepted input modalities.
    #[must_use]
    pub fn accepts(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Input limits enforced before any network call.
    #[must_use]
    pub fn input_limits(&self) -> &InputLimits {
        &self.limits
    }
}

impl core::fmt::Debug for ModelDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelDescriptor")
            .field("id", &self.id)
            .field("defaults", &self.defaults)
            .field("capabilities", &self.capabilities)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

/// Default generation parameters for a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationDefaults {
    /// Sampling temperature in `[0, 1]`.
    pub temperature: f32,
    /// Maximum output length in tokens.
    pub max_tokens: u32,
    /// Nucleus sampling probability mass in `(0, 1]`.
    pub top_p: f32,
    /// Top-k sampling cutoff.
    pub top_k: u32,
    /// Retrieval chunking defaults, for RAG-backed families.
    pub chunking: Option<ChunkingDefaults>,
}

/// Retrieval chunking configuration for RAG-backed model families.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingDefaults {
    /// Document chunk size in tokens.
    pub chunk_size: u32,
    /// Overlap between adjacent chunks in tokens.
    pub overlap: u32,
    /// Minimum similarity score for a chunk to be retrieved.
    pub similarity_threshold: f32,
}

/// Accepted input modalities for a model.
///
/// Text input is accepted by every model; the remaining modalities are opt-in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// Whether and how the model accepts image input.
    pub image: ImageSupport,
    /// Whether the model accepts supplementary document context.
    pub document_context: bool,
}

impl Capabilities {
    /// Text input only; images are rejected before any network call.
    #[must_use]
    pub fn text_only() -> Self {
        Self::default()
    }

    /// Text input plus supplementary document context.
    #[must_use]
    pub fn with_document_context() -> Self {
        Self {
            image: ImageSupport::Unsupported,
            document_context: true,
        }
    }

    /// Vision-capable, with the given image requirement.
    #[must_use]
    pub fn vision(image: ImageSupport) -> Self {
        Self {
            image,
            document_context: false,
        }
    }
}

/// How a model treats image input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSupport {
    /// Image payloads are rejected.
    #[default]
    Unsupported,
    /// An image may accompany the prompt.
    Optional,
    /// An image must accompany every call.
    Required,
}

/// Input limits enforced by the adapter before any network call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InputLimits {
    /// Maximum primary-input length in characters.
    pub max_input_chars: usize,
    /// Maximum decoded image size in bytes, for vision-capable models.
    pub max_image_bytes: Option<usize>,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_input_chars: 8192,
            max_image_bytes: None,
        }
    }
}
