//! Phi-2 general text backend.
//!
//! Talks to a small general-purpose text-generation service. The service
//! names its output-length knob `max_length`; the provider maps the canonical
//! `max_tokens` parameter onto it.

mod provider;
mod types;

pub use provider::Phi2Provider;

use crate::config::EndpointConfig;
use meridian_models::invocation::{
    Capabilities, GenerationDefaults, InputLimits, ModelDescriptor,
};
use std::sync::Arc;

/// Builds the `"phi-2"` descriptor with the service's observed defaults.
///
/// The model has a 2048-token context window; the input limit mirrors it.
#[must_use]
pub fn descriptor(config: EndpointConfig) -> ModelDescriptor {
    ModelDescriptor::new(
        "phi-2",
        Arc::new(Phi2Provider::new(config)),
        GenerationDefaults {
            temperature: 0.7,
            max_tokens: 200,
            top_p: 0.95,
            top_k: 50,
            chunking: None,
        },
    )
    .capabilities(Capabilities::text_only())
    .limits(InputLimits {
        max_input_chars: 2048,
        max_image_bytes: None,
    })
}
