//! The stateful inference adapter.

use parking_lot::Mutex;
use std::sync::Arc;

use super::descriptor::{ImageSupport, ModelDescriptor};
use super::error::InvocationError;
use super::types::{InvocationRequest, InvocationResult};

/// Bridges one named model to one asynchronous request/response exchange.
///
/// Created via [`ModelRegistry::adapter()`](crate::ModelRegistry::adapter).
/// Each instance tracks its own pending/error flags; instances are fully
/// independent and share nothing beyond the immutable registry.
///
/// The state machine is `idle -> pending -> idle`, with `last_error` set when
/// the pending invocation settles with a failure. At most one invocation may
/// be outstanding per instance; a second call while one is pending fails with
/// [`InvocationError::AlreadyPending`] and issues no network call. There is no
/// cancellation surface: once issued, an invocation runs until it settles.
#[derive(Clone)]
pub struct InferenceAdapter {
    descriptor: Arc<ModelDescriptor>,
    state: Arc<Mutex<StateInner>>,
}

#[derive(Debug, Default)]
struct StateInner {
    pending: bool,
    last_error: Option<InvocationError>,
}

/// A point-in-time snapshot of an adapter's local state.
#[derive(Debug, Clone, Default)]
pub struct AdapterState {
    /// Whether an invocation is currently outstanding.
    pub pending: bool,
    /// The error from the most recent settled invocation, cleared on success.
    pub last_error: Option<InvocationError>,
}

/// Clears the pending flag when the invocation settles, including when the
/// invoke future is dropped mid-flight, so an abandoned call cannot wedge the
/// adapter.
struct PendingGuard<'a> {
    state: &'a Mutex<StateInner>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().pending = false;
    }
}

impl InferenceAdapter {
    /// Creates an adapter bound to the given descriptor.
    #[must_use]
    pub fn new(descriptor: Arc<ModelDescriptor>) -> Self {
        Self {
            descriptor,
            state: Arc::new(Mutex::new(StateInner::default())),
        }
    }

    /// The descriptor this adapter is bound to.
    #[must_use]
    pub fn descriptor(&self) -> &ModelDescriptor {
        &self.descriptor
    }

    /// Issues one invocation against the bound model.
    ///
    /// While an invocation is outstanding, any further call fails with
    /// [`InvocationError::AlreadyPending`] before the request is even
    /// validated, leaving the in-flight exchange's state untouched. When
    /// idle, the request is validated against the descriptor's capabilities
    /// and limits before any network I/O; a validation failure produces
    /// [`InvocationError::InvalidRequest`] with zero network calls. Otherwise
    /// the request is merged over the descriptor defaults and handed to the
    /// provider for exactly one exchange. No retries, no fallback.
    ///
    /// # Errors
    ///
    /// Returns an [`InvocationError`] describing the validation, transport,
    /// server, or response-shape failure. Local state is updated before the
    /// call returns.
    pub async fn invoke(
        &self,
        request: InvocationRequest,
    ) -> Result<InvocationResult, InvocationError> {
        {
            let mut state = self.state.lock();
            if state.pending {
                // The in-flight exchange is unaffected; don't clobber its state.
                return Err(InvocationError::AlreadyPending);
            }
            // Validation is pure and runs under the lock so a rejected call
            // can never race the pending check.
            if let Err(err) = validate(&request, &self.descriptor) {
                state.last_error = Some(err.clone());
                return Err(err);
            }
            state.pending = true;
        }
        let guard = PendingGuard { state: &self.state };

        let resolved = request.resolve(self.descriptor.id(), self.descriptor.defaults());
        let result = self.descriptor.provider().invoke(resolved).await;

        self.state.lock().last_error = result.as_ref().err().cloned();
        drop(guard);

        result
    }

    /// Returns a snapshot of the adapter-local state. Pure read, no side
    /// effects.
    #[must_use]
    pub fn current_state(&self) -> AdapterState {
        let state = self.state.lock();
        AdapterState {
            pending: state.pending,
            last_error: state.last_error.clone(),
        }
    }
}

impl core::fmt::Debug for InferenceAdapter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InferenceAdapter")
            .field("model", &self.descriptor.id())
            .field("state", &*self.state.lock())
            .finish()
    }
}

fn validate(
    request: &InvocationRequest,
    descriptor: &ModelDescriptor,
) -> Result<(), InvocationError> {
    let invalid = |message: String| Err(InvocationError::InvalidRequest(message));

    if request.prompt.is_empty() {
        return invalid("prompt must not be empty".to_string());
    }

    let limits = descriptor.input_limits();
    let prompt_chars = request.prompt.chars().count();
    if prompt_chars > limits.max_input_chars {
        return invalid(format!(
            "prompt length {prompt_chars} exceeds the model's limit of {} characters",
            limits.max_input_chars
        ));
    }

    match (descriptor.accepts().image, &request.image) {
        (ImageSupport::Unsupported, Some(_)) => {
            return invalid(format!(
                "model '{}' does not accept image input",
                descriptor.id()
            ));
        }
        (ImageSupport::Required, None) => {
            return invalid(format!(
                "model '{}' requires an image payload",
                descriptor.id()
            ));
        }
        _ => {}
    }

    if let (Some(image), Some(max_bytes)) = (&request.image, limits.max_image_bytes) {
        let estimated = image.decoded_len_estimate();
        if estimated > max_bytes {
            return invalid(format!(
                "image payload of ~{estimated} bytes exceeds the {max_bytes} byte limit"
            ));
        }
    }

    let params = &request.parameters;
    if let Some(temperature) = params.temperature {
        if !(0.0..=1.0).contains(&temperature) {
            return invalid(format!("temperature {temperature} is outside [0, 1]"));
        }
    }
    if let Some(top_p) = params.top_p {
        if top_p <= 0.0 || top_p > 1.0 {
            return invalid(format!("top_p {top_p} is outside (0, 1]"));
        }
    }
    if params.top_k == Some(0) {
        return invalid("top_k must be at least 1".to_string());
    }
    if params.max_tokens == Some(0) {
        return invalid("max_tokens must be at least 1".to_string());
    }

    Ok(())
}
