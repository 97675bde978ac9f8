//! Mistral RAG text backend.
//!
//! Talks to a retrieval-augmented generation service: the query is sent with
//! optional context documents and a retrieval chunking configuration, and the
//! service returns generated text plus the contexts it retrieved.

mod client;
mod provider;
mod types;

pub use provider::MistralProvider;

use crate::config::EndpointConfig;
use meridian_models::invocation::{
    Capabilities, ChunkingDefaults, GenerationDefaults, InputLimits, ModelDescriptor,
};
use std::sync::Arc;

/// Builds the `"mistral"` descriptor with the service's observed defaults.
#[must_use]
pub fn descriptor(config: EndpointConfig) -> ModelDescriptor {
    ModelDescriptor::new(
        "mistral",
        Arc::new(MistralProvider::new(config)),
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
        },
    )
    .capabilities(Capabilities::with_document_context())
    .limits(InputLimits {
        max_input_chars: 4096,
        max_image_bytes: None,
    })
}
