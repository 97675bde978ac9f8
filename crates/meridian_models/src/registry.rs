//! Model descriptor registry.

use crate::error::RegistryError;
use crate::invocation::{InferenceAdapter, ModelDescriptor};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable directory of known models.
///
/// # For Consumers
///
/// Resolve descriptors (or construct adapters) using the model identifier the
/// descriptor was registered under (e.g. `"mistral"`, `"phi-2"`). Lookup is an
/// exact match.
///
/// # Construction
///
/// The registry is built once at process start via [`RegistryBuilder`] and is
/// read-only afterwards; adding a model requires a new deployment, not a
/// runtime operation. Because it is immutable, it can be shared freely between
/// adapter instances without locking.
///
/// ```
/// # use meridian_models::RegistryBuilder;
/// # use meridian_models::invocation::{
/// #     GenerationDefaults, InvocationError, InvocationResult, ModelDescriptor, ModelProvider,
/// #     ResolvedRequest,
/// # };
/// # use async_trait::async_trait;
/// # use std::sync::Arc;
/// # struct MyProvider;
/// # #[async_trait]
/// # impl ModelProvider for MyProvider {
/// #     async fn invoke(&self, _request: ResolvedRequest) -> Result<InvocationResult, InvocationError> {
/// #         unimplemented!()
/// #     }
/// # }
/// # let defaults = GenerationDefaults {
/// #     temperature: 0.7, max_tokens: 2048, top_p: 0.95, top_k: 50, chunking: None,
/// # };
/// let registry = RegistryBuilder::new()
///     .register(ModelDescriptor::new("mistral", Arc::new(MyProvider), defaults))
///     .build();
///
/// let adapter = registry.adapter("mistral").unwrap();
/// ```
pub struct ModelRegistry {
    models: HashMap<String, Arc<ModelDescriptor>>,
}

impl core::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.model_ids())
            .finish()
    }
}

impl ModelRegistry {
    /// Resolves a descriptor by its exact identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownModel`] when the identifier is absent.
    /// Never returns a partial or default descriptor.
    pub fn resolve(&self, id: impl AsRef<str>) -> Result<Arc<ModelDescriptor>, RegistryError> {
        let id = id.as_ref();
        self.models
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownModel(id.to_string()))
    }

    /// Creates a fresh [`InferenceAdapter`] bound to the named model.
    ///
    /// Each call returns an independent adapter instance with its own
    /// pending/error state, typically one per presentation component.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownModel`] when the identifier is absent.
    pub fn adapter(&self, id: impl AsRef<str>) -> Result<InferenceAdapter, RegistryError> {
        Ok(InferenceAdapter::new(self.resolve(id)?))
    }

    /// Checks if a model is registered.
    #[must_use]
    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.models.contains_key(id.as_ref())
    }

    /// Lists registered model identifiers.
    #[must_use]
    pub fn model_ids(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }
}

/// Builder for the immutable [`ModelRegistry`].
///
/// The builder is the only mutation surface; `build()` consumes it, after
/// which the set of models is fixed for the process lifetime.
#[derive(Default)]
pub struct RegistryBuilder {
    models: HashMap<String, Arc<ModelDescriptor>>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a model descriptor under its own identifier.
    ///
    /// # Panics
    ///
    /// Panics if a descriptor with the same identifier is already registered;
    /// duplicate registration is a startup programming error.
    #[must_use]
    pub fn register(mut self, descriptor: ModelDescriptor) -> Self {
        let id = descriptor.id().to_string();
        assert!(
            !self.models.contains_key(&id),
            "model '{id}' is already registered"
        );
        self.models.insert(id, Arc::new(descriptor));
        self
    }

    /// Finalizes the registry.
    #[must_use]
    pub fn build(self) -> ModelRegistry {
        ModelRegistry {
            models: self.models,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::{
        GenerationDefaults, InvocationError, InvocationResult, ModelProvider, ResolvedRequest,
    };
    use async_trait::async_trait;

    struct NoopProvider;

    #[async_trait]
    impl ModelProvider for NoopProvider {
        async fn invoke(
            &self,
            _request: ResolvedRequest,
        ) -> Result<InvocationResult, InvocationError> {
            unimplemented!("registry tests never invoke")
        }
    }

    fn descriptor(id: &str) -> ModelDescriptor {
        ModelDescriptor::new(
            id,
            Arc::new(NoopProvider),
            GenerationDefaults {
                temperature: 0.7,
                max_tokens: 2048,
                top_p: 0.95,
                top_k: 50,
                chunking: None,
            },
        )
    }

    fn registry() -> ModelRegistry {
        RegistryBuilder::new()
            .register(descriptor("mistral"))
            .register(descriptor("bert"))
            .register(descriptor("phi-2"))
            .build()
    }

    #[test]
    fn resolve_returns_descriptor_with_matching_id() {
        let registry = registry();
        for id in ["mistral", "bert", "phi-2"] {
            let descriptor = registry.resolve(id).expect("registered model resolves");
            assert_eq!(descriptor.id(), id);
        }
    }

    #[test]
    fn resolve_unknown_id_fails() {
        let registry = registry();
        let err = registry.resolve("gpt-j").expect_err("unregistered id");
        assert_eq!(err, RegistryError::UnknownModel("gpt-j".to_string()));
    }

    #[test]
    fn resolve_is_exact_match_only() {
        let registry = registry();
        assert!(registry.resolve("Mistral").is_err());
        assert!(registry.resolve("mistral-7b").is_err());
        assert!(registry.resolve("mist").is_err());
    }

    #[test]
    fn adapters_from_the_same_registry_are_independent() {
        let registry = registry();
        let first = registry.adapter("mistral").unwrap();
        let second = registry.adapter("mistral").unwrap();

        assert!(!first.current_state().pending);
        assert!(!second.current_state().pending);
        assert_eq!(first.descriptor().id(), second.descriptor().id());
    }

    #[test]
    fn model_ids_lists_every_registration() {
        let mut ids = registry().model_ids();
        ids.sort();
        assert_eq!(ids, vec!["bert", "mistral", "phi-2"]);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn duplicate_registration_panics() {
        let _ = RegistryBuilder::new()
            .register(descriptor("mistral"))
            .register(descriptor("mistral"));
    }
}
