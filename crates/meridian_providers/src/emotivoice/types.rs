//! EmotiVoice endpoint wire types.

use serde::{Deserialize, Serialize};

/// Request body for the synthesis route.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisRequest {
    /// The text to synthesize.
    pub text: String,
    /// Emotion to render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    /// Emotion intensity in `[0, 1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f32>,
}

/// Voice knobs carried in the canonical request's `additional` parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoiceOptions {
    /// Emotion to render (`"neutral"`, `"happy"`, ...).
    #[serde(default)]
    pub emotion: Option<String>,
    /// Emotion intensity in `[0, 1]`.
    #[serde(default)]
    pub intensity: Option<f32>,
}

/// Response body from the synthesis route.
///
/// Deployed instances of the service differ on the URL field's casing, so
/// both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisResponse {
    /// URL of the synthesized audio.
    #[serde(alias = "audioUrl")]
    pub audio_url: String,
    /// Server-side processing time in seconds.
    #[serde(default)]
    pub processing_time: f64,
    /// Characters billed for the synthesis; the usage count for this family.
    #[serde(default)]
    pub characters_billed: u64,
}
