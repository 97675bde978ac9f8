//! Error types for the model registry.

/// Error resolving a model from the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The identifier is not present in the registry.
    ///
    /// Lookup is an exact string match; there are no partial matches and no
    /// case-insensitivity. Registering a new model requires a new deployment,
    /// so this is a configuration or programming error in the calling code.
    #[error("unknown model: {0}")]
    UnknownModel(String),
}
