//! Connection settings for the completion endpoint.

use std::fmt;

use crate::error::{QaError, Result};

/// Proxy that holds the API key on the server side.
pub const DEFAULT_ENDPOINT: &str = "https://qa-proxy.anet-krajcovicovie.workers.dev";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
/// Value of the `anthropic-version` header in direct mode.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Token limit for test case and artifact generation.
pub const GENERATION_MAX_TOKENS: u32 = 2000;
/// Token limit for execution summaries.
pub const SUMMARY_MAX_TOKENS: u32 = 1500;

/// How requests authenticate against the endpoint.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum CredentialMode {
    /// No credential header; a proxy injects the key.
    #[default]
    Proxy,
    /// The client sends `x-api-key` itself.
    Direct { api_key: String },
}

impl CredentialMode {
    pub fn name(&self) -> &'static str {
        match self {
            CredentialMode::Proxy => "proxy",
            CredentialMode::Direct { .. } => "direct",
        }
    }
}

// Keep keys out of debug logs.
impl fmt::Debug for CredentialMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialMode::Proxy => f.write_str("Proxy"),
            CredentialMode::Direct { .. } => f
                .debug_struct("Direct")
                .field("api_key", &"<redacted>")
                .finish(),
        }
    }
}

/// Credential mode selected on the command line, before a key is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialKind {
    #[default]
    Proxy,
    Direct,
}

/// Endpoint, model and credentials used by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub model: String,
    pub credential: CredentialMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            credential: CredentialMode::Proxy,
        }
    }
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }
}

/// Builder for [`GeneratorConfig`].
///
/// Unset values fall back to the defaults. Choosing [`CredentialKind::Direct`]
/// without an API key fails at [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    endpoint: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
    credential: CredentialKind,
}

impl GeneratorConfigBuilder {
    pub fn with_endpoint(mut self, endpoint: Option<impl Into<String>>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.into());
        }
        self
    }

    pub fn with_model(mut self, model: Option<impl Into<String>>) -> Self {
        if let Some(model) = model {
            self.model = Some(model.into());
        }
        self
    }

    pub fn with_api_key(mut self, api_key: Option<impl Into<String>>) -> Self {
        self.api_key = api_key.map(Into::into);
        self
    }

    pub fn with_credential(mut self, credential: CredentialKind) -> Self {
        self.credential = credential;
        self
    }

    /// # Errors
    ///
    /// Returns `QaError::Configuration` if direct mode has no API key or the
    /// endpoint is blank.
    pub fn build(self) -> Result<GeneratorConfig> {
        let defaults = GeneratorConfig::default();

        let endpoint = self.endpoint.unwrap_or(defaults.endpoint);
        if endpoint.trim().is_empty() {
            return Err(QaError::Configuration {
                message: "Endpoint cannot be empty".to_string(),
            });
        }

        let credential = match self.credential {
            CredentialKind::Proxy => CredentialMode::Proxy,
            CredentialKind::Direct => {
                let api_key = self
                    .api_key
                    .filter(|key| !key.trim().is_empty())
                    .ok_or_else(|| QaError::Configuration {
                        message: "Direct credential mode requires an API key".to_string(),
                    })?;
                CredentialMode::Direct { api_key }
            }
        };

        Ok(GeneratorConfig {
            endpoint,
            model: self.model.unwrap_or(defaults.model),
            credential,
        })
    }
}
