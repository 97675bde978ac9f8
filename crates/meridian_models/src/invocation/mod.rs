//! Model invocation capabilities.
//!
//! This module provides the core traits and types for issuing a single
//! request/response exchange with a remote model endpoint, including:
//!
//! - The canonical request/result envelope shared by every model family
//! - Static model descriptors (defaults, capabilities, input limits)
//! - The stateful [`InferenceAdapter`] bridging one named model to one
//!   asynchronous exchange at a time

mod adapter;
mod descriptor;
mod error;
mod provider;
mod types;

pub use adapter::{AdapterState, InferenceAdapter};
pub use descriptor::{
    Capabilities, ChunkingDefaults, GenerationDefaults, ImageSupport, InputLimits, ModelDescriptor,
};
pub use error::InvocationError;
pub use provider::ModelProvider;
pub use types::{
    GenerationParams, ImageMediaType, ImagePayload, InvocationMetadata, InvocationRequest,
    InvocationResult, ResolvedParams, ResolvedRequest, ResultPayload,
};
