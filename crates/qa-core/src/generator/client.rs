//! Transport to the Messages-style completion endpoint.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use super::config::{CredentialMode, GeneratorConfig, ANTHROPIC_VERSION};
use crate::error::{GenerationResultExt, QaError, Result};

/// Sends one prompt and returns the model's text answer.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

impl MessagesResponse {
    fn into_text(self) -> Result<String> {
        if let Some(error) = self.error {
            return Err(QaError::generation(error.message));
        }
        self.content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or_else(|| QaError::generation("Response contained no text content"))
    }
}

/// [`CompletionClient`] over HTTPS.
pub struct HttpCompletionClient {
    client: reqwest::Client,
    config: GeneratorConfig,
}

impl HttpCompletionClient {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(
            "Requesting completion from {} ({} mode, {} max tokens)",
            self.config.endpoint,
            self.config.credential.name(),
            max_tokens
        );

        let mut request = self.client.post(&self.config.endpoint).json(&body);
        if let CredentialMode::Direct { api_key } = &self.config.credential {
            request = request
                .header("x-api-key", api_key)
                .header("anthropic-version", ANTHROPIC_VERSION);
        }

        let response = request
            .send()
            .await
            .generation_context("Request failed")?;
        let status = response.status();
        let text = response
            .text()
            .await
            .generation_context("Failed to read response body")?;

        // An error payload wins over the bare status code.
        let parsed = serde_json::from_str::<MessagesResponse>(&text);
        if let Ok(MessagesResponse {
            error: Some(error), ..
        }) = &parsed
        {
            return Err(QaError::generation(error.message.clone()));
        }
        if !status.is_success() {
            return Err(QaError::generation(format!("API error ({status}): {text}")));
        }

        parsed
            .map_err(|e| QaError::generation(format!("Invalid response format: {e}")))?
            .into_text()
    }
}
