//! LLaVA endpoint wire types.
//!
//! The request travels as multipart form data; only the `parameters` field
//! and the response body are JSON.

use serde::{Deserialize, Serialize};

/// JSON content of the multipart `parameters` field.
#[derive(Debug, Clone, Serialize)]
pub struct ParametersField {
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Nucleus sampling probability mass.
    pub top_p: f32,
    /// Top-k sampling cutoff.
    pub top_k: u32,
}

/// Response body from the vision route.
#[derive(Debug, Clone, Deserialize)]
pub struct VisionResponse {
    /// The generated description/answer.
    pub response: String,
    /// Server-side generation time in seconds.
    #[serde(default)]
    pub generation_time: f64,
    /// Tokens consumed by the call.
    #[serde(default)]
    pub tokens: u64,
}
