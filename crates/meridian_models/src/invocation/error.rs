//! Error types for invocation operations.

/// Errors for a single model invocation.
///
/// The adapter never retries and never falls back to a degraded mode; each
/// variant is surfaced to the caller exactly once, alongside the adapter's
/// `last_error` state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvocationError {
    /// The request violates a documented constraint (empty prompt, input over
    /// the model's length limit, parameter outside its declared bounds, image
    /// rules). No network call was made; recoverable by correcting the input.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An invocation is already outstanding on this adapter instance.
    ///
    /// The presentation layer is expected to disable the trigger while an
    /// invocation is pending; no network call was made and the in-flight
    /// exchange is unaffected.
    #[error("an invocation is already pending on this adapter")]
    AlreadyPending,

    /// Connectivity failure before a response was received. Safe to retry with
    /// backoff, but the adapter itself never does.
    #[error("transport error: {0}")]
    Transport(String),

    /// The configured client deadline expired before the call settled.
    #[error("request timed out")]
    Timeout,

    /// The remote endpoint returned a non-success HTTP status.
    #[error("server error (status {status}): {message}")]
    Server {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body, surfaced verbatim.
        message: String,
    },

    /// The response body did not match the expected shape for this model
    /// family. Non-retryable; signals a contract mismatch with the remote
    /// service.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
