//! Explicit endpoint configuration.
//!
//! Endpoint URLs are supplied once at process start and threaded to the
//! provider constructors; nothing in a request path reads the process
//! environment.

use core::time::Duration;

/// Connection settings for one model endpoint.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Base URL of the model endpoint.
    pub base_url: String,
    /// Optional per-request deadline. Without it an invocation may remain
    /// pending indefinitely if the transport never settles.
    pub timeout: Option<Duration>,
}

impl EndpointConfig {
    /// Creates a config for the given base URL with no deadline.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Sets the per-request deadline.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Endpoint configuration for every model family.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// RAG text endpoint (mistral family).
    pub mistral: EndpointConfig,
    /// Vision-language endpoint (llava family).
    pub llava: EndpointConfig,
    /// Code generation endpoint (codellama family).
    pub codellama: EndpointConfig,
    /// General text endpoint (phi-2 family).
    pub phi2: EndpointConfig,
    /// Text-to-speech endpoint (emotivoice family).
    pub emotivoice: EndpointConfig,
}

/// Environment variables read by [`Endpoints::from_env`].
const ENDPOINT_VARS: [&str; 5] = [
    "MERIDIAN_MISTRAL_ENDPOINT",
    "MERIDIAN_LLAVA_ENDPOINT",
    "MERIDIAN_CODELLAMA_ENDPOINT",
    "MERIDIAN_PHI2_ENDPOINT",
    "MERIDIAN_EMOTIVOICE_ENDPOINT",
];

/// Optional request deadline in seconds, applied to every family.
const TIMEOUT_VAR: &str = "MERIDIAN_REQUEST_TIMEOUT_SECS";

/// Error loading endpoint configuration at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required endpoint variable is not set.
    #[error("missing environment variable: {0}")]
    MissingVar(String),

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: {value}")]
    InvalidValue {
        /// The offending variable name.
        var: String,
        /// The value that failed to parse.
        value: String,
    },
}

impl Endpoints {
    /// Loads endpoint configuration from the process environment.
    ///
    /// Reads one `MERIDIAN_<FAMILY>_ENDPOINT` variable per model family plus
    /// the optional `MERIDIAN_REQUEST_TIMEOUT_SECS` deadline. Intended to run
    /// once at startup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required variable is absent or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads endpoint configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required variable is absent or a value
    /// fails to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let timeout = match lookup(TIMEOUT_VAR) {
            None => None,
            Some(raw) => Some(Duration::from_secs(raw.parse().map_err(|_| {
                ConfigError::InvalidValue {
                    var: TIMEOUT_VAR.to_string(),
                    value: raw,
                }
            })?)),
        };

        let load = |var: &str| -> Result<EndpointConfig, ConfigError> {
            let base_url = lookup(var).ok_or_else(|| ConfigError::MissingVar(var.to_string()))?;
            Ok(EndpointConfig { base_url, timeout })
        };

        Ok(Self {
            mistral: load(ENDPOINT_VARS[0])?,
            llava: load(ENDPOINT_VARS[1])?,
            codellama: load(ENDPOINT_VARS[2])?,
            phi2: load(ENDPOINT_VARS[3])?,
            emotivoice: load(ENDPOINT_VARS[4])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars() -> HashMap<&'static str, String> {
        ENDPOINT_VARS
            .iter()
            .map(|var| (*var, format!("http://localhost:8000/{var}")))
            .collect()
    }

    #[test]
    fn loads_every_family_endpoint() {
        let vars = vars();
        let endpoints = Endpoints::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert!(endpoints.mistral.base_url.contains("MISTRAL"));
        assert!(endpoints.llava.base_url.contains("LLAVA"));
        assert!(endpoints.codellama.base_url.contains("CODELLAMA"));
        assert!(endpoints.phi2.base_url.contains("PHI2"));
        assert!(endpoints.emotivoice.base_url.contains("EMOTIVOICE"));
        assert!(endpoints.mistral.timeout.is_none());
    }

    #[test]
    fn missing_endpoint_variable_is_an_error() {
        let mut vars = vars();
        vars.remove("MERIDIAN_LLAVA_ENDPOINT");

        let err = Endpoints::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVar("MERIDIAN_LLAVA_ENDPOINT".to_string())
        );
    }

    #[test]
    fn timeout_applies_to_every_family() {
        let mut vars = vars();
        vars.insert(TIMEOUT_VAR, "30".to_string());

        let endpoints = Endpoints::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(endpoints.mistral.timeout, Some(Duration::from_secs(30)));
        assert_eq!(endpoints.emotivoice.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn unparsable_timeout_is_an_error() {
        let mut vars = vars();
        vars.insert(TIMEOUT_VAR, "soon".to_string());

        let err = Endpoints::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
