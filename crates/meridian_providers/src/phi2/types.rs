//! Phi-2 endpoint wire types.

use serde::{Deserialize, Serialize};

/// Request body for the generation route.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// The text-generation prompt.
    pub prompt: String,
    /// Sampling parameters.
    pub parameters: SamplingParams,
}

/// Sampling parameters on the wire.
///
/// This service takes `max_length` where the other families take `max_tokens`,
/// and has no nucleus sampling knob.
#[derive(Debug, Clone, Serialize)]
pub struct SamplingParams {
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum output length in tokens.
    pub max_length: u32,
    /// Top-k sampling cutoff.
    pub top_k: u32,
}

/// Response body from the generation route.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The generated text.
    pub generated_text: String,
    /// Server-side generation time in seconds.
    pub generation_time: f64,
    /// Tokens produced by the call.
    pub token_count: u64,
    /// Device the service ran on (`"cuda"` / `"cpu"`), when reported.
    #[serde(default)]
    pub device: Option<String>,
}
