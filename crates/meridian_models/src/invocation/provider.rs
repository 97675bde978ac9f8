//! The [`ModelProvider`] trait for model family backends.

use async_trait::async_trait;

use super::error::InvocationError;
use super::types::{InvocationResult, ResolvedRequest};

/// Trait implemented by each model family to issue one invocation.
///
/// Implementations receive a request that has already been validated and
/// merged over the descriptor defaults. They must issue exactly one network
/// call per invocation (no implicit retries) and reduce the family-specific
/// response body to the canonical [`InvocationResult`] envelope.
#[async_trait]
pub trait ModelProvider: Send + Sync + 'static {
    /// Sends one invocation to the remote model endpoint.
    ///
    /// # Arguments
    ///
    /// * `request` - The validated, fully resolved request
    async fn invoke(&self, request: ResolvedRequest) -> Result<InvocationResult, InvocationError>;
}
