//! CodeLlama code-generation backend.
//!
//! Talks to a code-generation service exposing a generate route and a static
//! model-info route.

mod client;
mod provider;
mod types;

pub use provider::CodeLlamaProvider;
pub use types::ModelInfo;

use crate::config::EndpointConfig;
use meridian_models::invocation::{
    Capabilities, GenerationDefaults, InputLimits, ModelDescriptor,
};
use std::sync::Arc;

/// Builds the `"codellama"` descriptor with the service's observed defaults.
#[must_use]
pub fn descriptor(config: EndpointConfig) -> ModelDescriptor {
    ModelDescriptor::new(
        "codellama",
        Arc::new(CodeLlamaProvider::new(config)),
        GenerationDefaults {
            temperature: 0.2,
            max_tokens: 1024,
            top_p: 0.95,
            top_k: 50,
            chunking: None,
        },
    )
    .capabilities(Capabilities::text_only())
    .limits(InputLimits {
        max_input_chars: 8192,
        max_image_bytes: None,
    })
}
