//! CodeLlama endpoint wire types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for the generate route.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// The code-generation prompt.
    pub prompt: String,
    /// Sampling parameters.
    pub parameters: SamplingParams,
}

/// Sampling parameters on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct SamplingParams {
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Nucleus sampling probability mass.
    pub top_p: f32,
    /// Top-k sampling cutoff.
    pub top_k: u32,
}

/// Response body from the generate route.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The generated source code.
    pub generated_code: String,
    /// Language the service believes it generated.
    #[serde(default)]
    pub language: Option<String>,
    /// Server-side processing time in seconds.
    pub processing_time: f64,
    /// Token usage.
    pub usage: UsageInfo,
}

/// Token usage block.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageInfo {
    /// Total tokens consumed by the call.
    pub total_tokens: u64,
}

/// Static model information from the info route.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    /// Model name reported by the service.
    #[serde(default)]
    pub name: String,
    /// Context window in tokens, when reported.
    #[serde(default)]
    pub context_window: Option<u64>,
    /// Any further fields the service reports.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
