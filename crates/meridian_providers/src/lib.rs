//! Provider implementations for the Meridian model families.
//!
//! Each model family is a standalone [`ModelProvider`](meridian_models::invocation::ModelProvider)
//! implementation plus a descriptor carrying the family's observed defaults, capabilities,
//! and input limits. [`default_registry`] wires every enabled family into one immutable
//! [`ModelRegistry`](meridian_models::ModelRegistry).
//!
//! # Supported Families
//!
//! | Family | Feature Flag | Description |
//! |--------|--------------|-------------|
//! | Mistral | `mistral` (default) | RAG text generation |
//! | LLaVA | `llava` (default) | Vision-language, multipart image upload |
//! | CodeLlama | `codellama` (default) | Code generation |
//! | Phi-2 | `phi2` (default) | General text generation |
//! | EmotiVoice | `emotivoice` (default) | Text-to-speech, audio-URL output |
//!
//! # Feature Flags
//!
//! Every family is gated behind a feature flag; all are enabled by default. The
//! `llava` flag pulls in the image-processing dependencies used for the
//! client-side resize/normalization step.
//!
//! ```toml
//! # Text families only
//! meridian_providers = { path = "../meridian_providers", default-features = false, features = [
//!     "mistral",
//!     "phi2",
//! ] }
//! ```
//!
//! # Usage
//!
//! Endpoint URLs are supplied once at startup, either explicitly or from the
//! process environment:
//!
//! ```no_run
//! use meridian_providers::Endpoints;
//!
//! let endpoints = Endpoints::from_env().expect("endpoint configuration");
//! let registry = meridian_providers::default_registry(&endpoints);
//!
//! let adapter = registry.adapter("mistral").unwrap();
//! ```

mod config;
mod http;

pub use config::{ConfigError, EndpointConfig, Endpoints};

#[cfg(feature = "mistral")]
pub mod mistral;

#[cfg(feature = "mistral")]
pub use mistral::MistralProvider;

#[cfg(feature = "llava")]
pub mod llava;

#[cfg(feature = "llava")]
pub use llava::LlavaProvider;

#[cfg(feature = "codellama")]
pub mod codellama;

#[cfg(feature = "codellama")]
pub use codellama::CodeLlamaProvider;

#[cfg(feature = "phi2")]
pub mod phi2;

#[cfg(feature = "phi2")]
pub use phi2::Phi2Provider;

#[cfg(feature = "emotivoice")]
pub mod emotivoice;

#[cfg(feature = "emotivoice")]
pub use emotivoice::EmotiVoiceProvider;

use meridian_models::{ModelRegistry, RegistryBuilder};

/// Builds a registry containing every model family enabled by feature flags.
#[must_use]
pub fn default_registry(endpoints: &Endpoints) -> ModelRegistry {
    let mut builder = RegistryBuilder::new();

    #[cfg(feature = "mistral")]
    {
        builder = builder.register(mistral::descriptor(endpoints.mistral.clone()));
    }
    #[cfg(feature = "llava")]
    {
        builder = builder.register(llava::descriptor(endpoints.llava.clone()));
    }
    #[cfg(feature = "codellama")]
    {
        builder = builder.register(codellama::descriptor(endpoints.codellama.clone()));
    }
    #[cfg(feature = "phi2")]
    {
        builder = builder.register(phi2::descriptor(endpoints.phi2.clone()));
    }
    #[cfg(feature = "emotivoice")]
    {
        builder = builder.register(emotivoice::descriptor(endpoints.emotivoice.clone()));
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    fn endpoints() -> Endpoints {
        let config = |path: &str| {
            EndpointConfig::new(format!("http://localhost:8000/{path}"))
                .timeout(Duration::from_secs(30))
        };
        Endpoints {
            mistral: config("mistral"),
            llava: config("llava"),
            codellama: config("codellama"),
            phi2: config("phi2"),
            emotivoice: config("emotivoice"),
        }
    }

    #[test]
    fn default_registry_contains_every_enabled_family() {
        let registry = default_registry(&endpoints());

        #[cfg(feature = "mistral")]
        assert!(registry.contains("mistral"));
        #[cfg(feature = "llava")]
        assert!(registry.contains("llava"));
        #[cfg(feature = "codellama")]
        assert!(registry.contains("codellama"));
        #[cfg(feature = "phi2")]
        assert!(registry.contains("phi-2"));
        #[cfg(feature = "emotivoice")]
        assert!(registry.contains("emotivoice"));

        assert!(!registry.contains("gpt-j"));
    }

    #[cfg(feature = "mistral")]
    #[test]
    fn mistral_descriptor_carries_the_observed_defaults() {
        let registry = default_registry(&endpoints());
        let descriptor = registry.resolve("mistral").unwrap();

        let defaults = descriptor.defaults();
        assert_eq!(defaults.max_tokens, 2048);
        assert_eq!(defaults.top_k, 50);
        let chunking = defaults.chunking.as_ref().expect("RAG family chunks");
        assert_eq!(chunking.chunk_size, 512);
        assert_eq!(chunking.overlap, 50);
        assert!(descriptor.accepts().document_context);
        assert_eq!(descriptor.input_limits().max_input_chars, 4096);
    }

    #[cfg(feature = "llava")]
    #[test]
    fn llava_descriptor_enforces_the_image_size_limit() {
        use meridian_models::invocation::ImageSupport;

        let registry = default_registry(&endpoints());
        let descriptor = registry.resolve("llava").unwrap();

        assert_eq!(descriptor.accepts().image, ImageSupport::Optional);
        assert_eq!(
            descriptor.input_limits().max_image_bytes,
            Some(llava::MAX_IMAGE_BYTES)
        );
    }
}
