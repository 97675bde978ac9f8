//! EmotiVoice text-to-speech backend.
//!
//! Talks to a speech-synthesis service. The result is a reference (URL) to
//! the synthesized audio rather than inline audio data; playback is the
//! presentation layer's concern. Emotion and intensity ride in the request's
//! `additional` parameters.

mod provider;
mod types;

pub use provider::EmotiVoiceProvider;

use crate::config::EndpointConfig;
use meridian_models::invocation::{
    Capabilities, GenerationDefaults, InputLimits, ModelDescriptor,
};
use std::sync::Arc;

/// Builds the `"emotivoice"` descriptor with the service's observed defaults.
#[must_use]
pub fn descriptor(config: EndpointConfig) -> ModelDescriptor {
    ModelDescriptor::new(
        "emotivoice",
        Arc::new(EmotiVoiceProvider::new(config)),
        GenerationDefaults {
            temperature: 0.5,
            max_tokens: 1024,
            top_p: 1.0,
            top_k: 50,
            chunking: None,
        },
    )
    .capabilities(Capabilities::text_only())
    .limits(InputLimits {
        max_input_chars: 4096,
        max_image_bytes: None,
    })
}
