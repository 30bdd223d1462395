// ABOUTME: Coach chat service answering free-text fitness questions through the remote model
// ABOUTME: Failures are rendered as user-visible text instead of HTTP errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tracing::{info, warn};

use crate::constants::llm::{MAX_TOKENS, TEMPERATURE};
use crate::llm::prompts::chat_prompt;
use crate::llm::{ChatMessage, ChatRequest, LlmError, LlmProvider};

/// Reply when no credential is configured
pub const MISSING_KEY_REPLY: &str = "OpenRouter API key not found in environment variables";

/// Answers coaching questions; there is no static fallback for chat
#[derive(Clone)]
pub struct CoachChat {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl CoachChat {
    /// Create the chat service; `None` answers every question with [`MISSING_KEY_REPLY`]
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { provider }
    }

    /// Answer a question
    ///
    /// `referer` replaces the configured `HTTP-Referer` for this call.
    pub async fn ask(&self, question: &str, referer: Option<&str>) -> String {
        let Some(provider) = &self.provider else {
            warn!("Chat requested without a configured remote provider");
            return MISSING_KEY_REPLY.to_owned();
        };

        let mut request = ChatRequest::new(vec![ChatMessage::user(chat_prompt(question))])
            .with_temperature(TEMPERATURE)
            .with_max_tokens(MAX_TOKENS);
        if let Some(referer) = referer {
            request = request.with_referer(referer);
        }

        match provider.complete(&request).await {
            Ok(response) => {
                info!(provider = provider.name(), "Chat answered");
                response.content
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "Chat completion failed");
                Self::render_error(provider.display_name(), &e)
            }
        }
    }

    fn render_error(provider_name: &str, error: &LlmError) -> String {
        match error {
            LlmError::Status { status, body } => {
                format!("{provider_name} Error [{status}]: {body}")
            }
            other => format!("API Exception: {other}"),
        }
    }
}
