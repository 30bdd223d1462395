// ABOUTME: OpenRouter chat-completion provider used for plan generation and coach chat
// ABOUTME: Sends OpenAI-format requests with OpenRouter attribution headers and a hard timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenRouter` Provider
//!
//! `OpenRouter` exposes an `OpenAI`-compatible `chat/completions` endpoint and
//! asks callers to identify themselves with `HTTP-Referer` and `X-Title`
//! headers.
//!
//! ## Configuration
//!
//! Built from [`OpenRouterSettings`] (see `config::environment`):
//! - `OPENROUTER_API_KEY`: bearer credential; without it no provider is built
//! - `OPENROUTER_BASE_URL`: default <https://openrouter.ai/api/v1>
//! - `OPENROUTER_MODEL`: default `deepseek/deepseek-r1:free`
//! - `OPENROUTER_TIMEOUT_SECS`: default 30

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmError, LlmProvider, TokenUsage};
use crate::config::{OpenRouterSettings, ServerConfig};
use crate::constants::llm::OPENROUTER_DISPLAY_NAME;
use crate::errors::{AppError, AppResult};

/// Connection timeout, bounded by the overall request timeout
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Number of credential characters that may appear in logs
const KEY_LOG_PREFIX_LEN: usize = 8;

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenRouterRequest<'a> {
    model: &'a str,
    messages: Vec<OpenRouterMessage<'a>>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct OpenRouterMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatMessage> for OpenRouterMessage<'a> {
    fn from(msg: &'a ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            content: &msg.content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenRouterResponse {
    choices: Vec<OpenRouterChoice>,
    #[serde(default)]
    usage: Option<OpenRouterUsage>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterChoice {
    message: OpenRouterResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenRouter` provider
#[derive(Clone)]
pub struct OpenRouterConfig {
    /// Base URL without the `chat/completions` suffix
    pub base_url: String,
    /// Bearer credential
    pub api_key: String,
    /// Model used when a request does not name one
    pub default_model: String,
    /// Default `HTTP-Referer` header value
    pub referer: String,
    /// `X-Title` header value
    pub title: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl OpenRouterConfig {
    /// Build provider configuration from the remote service settings
    ///
    /// Returns `None` when no credential is configured.
    #[must_use]
    pub fn from_settings(settings: &OpenRouterSettings) -> Option<Self> {
        let api_key = settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())?;

        Some(Self {
            base_url: settings.base_url.clone(),
            api_key: api_key.to_owned(),
            default_model: settings.model.clone(),
            referer: settings.referer.clone(),
            title: settings.title.clone(),
            timeout: settings.timeout(),
        })
    }

    /// Build provider configuration from the full server configuration
    #[must_use]
    pub fn from_server_config(config: &ServerConfig) -> Option<Self> {
        Self::from_settings(&config.openrouter)
    }

    /// Credential prefix safe to log
    fn key_prefix(&self) -> String {
        self.api_key.chars().take(KEY_LOG_PREFIX_LEN).collect()
    }
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &format_args!("{}...", self.key_prefix()))
            .field("default_model", &self.default_model)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// `OpenRouter` chat-completion provider
pub struct OpenRouterProvider {
    client: Client,
    config: OpenRouterConfig,
}

impl OpenRouterProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenRouterConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(config.timeout))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        info!(
            "Initializing {} provider: base_url={}, model={}, key={}...",
            OPENROUTER_DISPLAY_NAME,
            config.base_url,
            config.default_model,
            config.key_prefix()
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    fn map_send_error(&self, error: &reqwest::Error) -> LlmError {
        if error.is_timeout() {
            LlmError::Timeout {
                seconds: self.config.timeout.as_secs(),
            }
        } else {
            LlmError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl LlmProvider for OpenRouterProvider {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    fn display_name(&self) -> &'static str {
        OPENROUTER_DISPLAY_NAME
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);
        let referer = request.referer.as_deref().unwrap_or(&self.config.referer);

        let body = OpenRouterRequest {
            model,
            messages: request.messages.iter().map(OpenRouterMessage::from).collect(),
            stream: false,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(
            "Sending {} messages to {} (referer={})",
            body.messages.len(),
            OPENROUTER_DISPLAY_NAME,
            referer
        );

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("HTTP-Referer", referer)
            .header("X-Title", &self.config.title)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to send request to {}: {}", OPENROUTER_DISPLAY_NAME, e);
                self.map_send_error(&e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            warn!("Failed to read {} response: {}", OPENROUTER_DISPLAY_NAME, e);
            self.map_send_error(&e)
        })?;

        if !status.is_success() {
            warn!(
                "{} request failed: {} - {}",
                OPENROUTER_DISPLAY_NAME,
                status.as_u16(),
                text
            );
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: OpenRouterResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyCompletion)?;
        let content = choice.message.content.ok_or(LlmError::EmptyCompletion)?;

        debug!(
            "Received response from {}: {} chars, finish_reason: {:?}",
            OPENROUTER_DISPLAY_NAME,
            content.len(),
            choice.finish_reason
        );

        Ok(ChatResponse {
            content,
            model: parsed.model.unwrap_or_else(|| model.to_owned()),
            usage: parsed.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(key: Option<&str>) -> OpenRouterSettings {
        OpenRouterSettings {
            api_key: key.map(ToOwned::to_owned),
            ..OpenRouterSettings::default()
        }
    }

    #[test]
    fn test_no_config_without_key() {
        assert!(OpenRouterConfig::from_settings(&settings(None)).is_none());
        assert!(OpenRouterConfig::from_settings(&settings(Some("  "))).is_none());
    }

    #[test]
    fn test_debug_hides_key() {
        let config =
            OpenRouterConfig::from_settings(&settings(Some("sk-or-v1-abcdefghijklmnop"))).unwrap();
        let rendered = format!("{config:?}");
        assert!(rendered.contains("sk-or-v1..."));
        assert!(!rendered.contains("abcdefghijklmnop"));
    }

    #[test]
    fn test_api_url_trims_trailing_slash() {
        let mut config = OpenRouterConfig::from_settings(&settings(Some("key"))).unwrap();
        config.base_url = "http://localhost:9999/api/v1/".into();
        let provider = OpenRouterProvider::new(config).unwrap();
        assert_eq!(
            provider.api_url("chat/completions"),
            "http://localhost:9999/api/v1/chat/completions"
        );
    }
}
