// ABOUTME: LLM provider abstraction for the remote plan and chat completion service
// ABOUTME: Defines chat message/request/response types, the provider trait and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LLM Provider Interface
//!
//! This module defines the contract the plan generator and coach chat use to
//! reach a chat-completion backend. The production backend is `OpenRouter`;
//! tests plug in stubs through the same trait.
//!
//! ## Key Concepts
//!
//! - **`LlmProvider`**: Async trait for non-streaming chat completion
//! - **`ChatMessage`**: Role-based message structure
//! - **`ChatRequest`**: Model, decoding parameters and an optional referer override
//! - **`LlmError`**: Every way a remote call can fail, as a value
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use fitcoach_server::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![
//!         ChatMessage::system("You are a professional fitness and nutrition expert."),
//!         ChatMessage::user("Suggest a 20 minute warm-up."),
//!     ]);
//!     match provider.complete(&request).await {
//!         Ok(response) => println!("{}", response.content),
//!         Err(e) => eprintln!("remote call failed: {e}"),
//!     }
//! }
//! ```

mod openrouter;
pub mod prompts;

pub use openrouter::{OpenRouterConfig, OpenRouterProvider};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier (provider default when `None`)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Whether to stream the response; providers here only support `false`
    pub stream: bool,
    /// Overrides the provider's configured referer for this call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
}

impl ChatRequest {
    /// Create a new chat request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
            stream: false,
            referer: None,
        }
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Send a different referer for this request only
    #[must_use]
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated message content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Errors
// ============================================================================

/// Failure of a remote completion call
///
/// None of these are retried. Plan generation maps every variant to the static
/// fallback plan; coach chat renders them as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmError {
    /// The service answered with a non-success status
    #[error("remote service returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
    /// No response within the configured timeout
    #[error("remote service timed out after {seconds}s")]
    Timeout {
        /// Configured timeout
        seconds: u64,
    },
    /// Connection or protocol failure before a status was received
    #[error("transport error: {0}")]
    Transport(String),
    /// The body was not a chat completion document
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// A completion document without textual content in its first choice
    #[error("completion contained no message content")]
    EmptyCompletion,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait for chat completion
///
/// Implement this trait to plug a different completion backend into the plan
/// generator and the coach chat.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "openrouter")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Default model to use if not specified in request
    fn default_model(&self) -> &str;

    /// Perform a chat completion (non-streaming)
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError>;
}
