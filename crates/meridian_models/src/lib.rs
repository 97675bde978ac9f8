//! Model invocation contract and registry for Meridian.
//!
//! Provides a unified interface for remote model-inference endpoints, decoupling
//! UI-facing consumers from per-family provider implementations.
//!
//! # Overview
//!
//! - Provider-agnostic: Consumers depend only on this crate, not specific provider
//!   crates.
//!
//! - Canonical result envelope: Every model family reduces its wire response to one
//!   [`InvocationResult`](invocation::InvocationResult) shape, so callers read
//!   `processing_time` and the payload without knowing the source model.
//!
//! - Explicit adapter state: Each [`InferenceAdapter`](invocation::InferenceAdapter)
//!   tracks its own pending/error flags with a plain accessor, testable without any
//!   rendering environment.
//!
//! # Example
//!
//! ```ignore
//! use meridian_models::RegistryBuilder;
//! use meridian_models::invocation::InvocationRequest;
//!
//! let registry = RegistryBuilder::new()
//!     .register(mistral_descriptor)
//!     .build();
//!
//! let adapter = registry.adapter("mistral")?;
//! let result = adapter.invoke(InvocationRequest::new("What is RAG?")).await?;
//!
//! println!("{:?}", result.payload);
//! ```

pub mod error;
pub mod invocation;
mod registry;

pub use registry::{ModelRegistry, RegistryBuilder};
