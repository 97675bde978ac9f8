//! LLaVA vision-language backend.
//!
//! Talks to a vision-language service over multipart form data: a textual
//! prompt, a JSON parameters field, and an optional image part. Images are
//! validated and normalized to a fixed square resolution client-side before
//! transmission.

mod provider;
mod types;

pub use provider::LlavaProvider;

use crate::config::EndpointConfig;
use meridian_models::invocation::{
    Capabilities, GenerationDefaults, ImageSupport, InputLimits, ModelDescriptor,
};
use std::sync::Arc;

/// Maximum accepted decoded image size in bytes.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Builds the `"llava"` descriptor with the service's observed defaults.
#[must_use]
pub fn descriptor(config: EndpointConfig) -> ModelDescriptor {
    ModelDescriptor::new(
        "llava",
        Arc::new(LlavaProvider::new(config)),
        GenerationDefaults {
            temperature: 0.7,
            max_tokens: 1024,
            top_p: 0.9,
            top_k: 50,
            chunking: None,
        },
    )
    .capabilities(Capabilities::vision(ImageSupport::Optional))
    .limits(InputLimits {
        max_input_chars: 4096,
        max_image_bytes: Some(MAX_IMAGE_BYTES),
    })
}
