//! Mistral RAG endpoint wire types.
//!
//! These types match the JSON contract of the RAG generation service.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Request Types
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for the generation route.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// The user query.
    pub query: String,
    /// Supplementary context documents.
    pub context: Vec<String>,
    /// Sampling parameters.
    pub parameters: SamplingParams,
    /// Retrieval configuration.
    pub rag_config: RagConfig,
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

/// Retrieval configuration on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct RagConfig {
    /// Whether retrieval is enabled for this call.
    pub enabled: bool,
    /// Document chunk size in tokens.
    pub chunk_size: u32,
    /// Overlap between adjacent chunks in tokens.
    pub overlap: u32,
    /// Minimum similarity score for a chunk to be retrieved.
    pub similarity_threshold: f32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Response body from the generation route.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The generated text.
    pub response: String,
    /// Context passages the service retrieved for this query.
    #[serde(default)]
    pub contexts: Vec<String>,
    /// Names of the documents the contexts came from.
    #[serde(default)]
    pub retrieved_documents: Vec<String>,
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
