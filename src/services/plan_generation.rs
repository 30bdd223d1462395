// ABOUTME: Plan orchestrator: prompt, remote completion, fallback on any failure
// ABOUTME: Never returns an error; every remote failure is logged and replaced by a static plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Generation
//!
//! ```text
//! generate(request)
//!   ├── no provider configured ──────────────► Fallback(static plan)
//!   └── provider.complete(system + prompt)
//!         ├── Ok(text) ──────────────────────► Remote(text)
//!         └── Err(any LlmError) ─────────────► Fallback(static plan)
//! ```
//!
//! One remote attempt per request, no retries.

use std::sync::Arc;

use tracing::{info, warn};

use super::fallback_plans::fallback_plan;
use crate::constants::llm::{MAX_TOKENS, TEMPERATURE};
use crate::llm::prompts::{build_plan_prompt, PLAN_SYSTEM_PROMPT};
use crate::llm::{ChatMessage, ChatRequest, LlmError, LlmProvider};
use crate::models::{PlanRequest, PlanResult};

/// Remote-first plan generator
#[derive(Clone)]
pub struct PlanGenerator {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl PlanGenerator {
    /// Create a generator; `None` serves fallback plans without calling out
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { provider }
    }

    /// Whether a remote provider is configured
    #[must_use]
    pub const fn has_remote(&self) -> bool {
        self.provider.is_some()
    }

    /// Completion request sent for a plan of the given kind
    #[must_use]
    pub fn build_request(request: &PlanRequest) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(PLAN_SYSTEM_PROMPT),
            ChatMessage::user(build_plan_prompt(request.plan_kind, &request.profile)),
        ])
        .with_temperature(TEMPERATURE)
        .with_max_tokens(MAX_TOKENS)
    }

    /// Produce a plan, remote when possible and static otherwise
    pub async fn generate(&self, request: &PlanRequest) -> PlanResult {
        let kind = request.plan_kind;
        let Some(provider) = &self.provider else {
            info!(plan.kind = %kind, "No remote provider configured, serving fallback plan");
            return PlanResult::Fallback(fallback_plan(kind));
        };

        match Self::try_remote(provider.as_ref(), request).await {
            Ok(text) => {
                info!(plan.kind = %kind, provider = provider.name(), "Remote plan generated");
                PlanResult::Remote(text)
            }
            Err(e) => {
                warn!(
                    plan.kind = %kind,
                    provider = provider.name(),
                    error = %e,
                    "Remote plan generation failed, serving fallback plan"
                );
                PlanResult::Fallback(fallback_plan(kind))
            }
        }
    }

    async fn try_remote(
        provider: &dyn LlmProvider,
        request: &PlanRequest,
    ) -> Result<String, LlmError> {
        let chat_request = Self::build_request(request);
        let response = provider.complete(&chat_request).await?;
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MessageRole;
    use crate::models::{PlanKind, PlanSource, UserProfile};

    #[test]
    fn test_request_shape() {
        let request = PlanGenerator::build_request(&PlanRequest::new(
            PlanKind::Diet,
            UserProfile::default(),
        ));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.messages[0].content, PLAN_SYSTEM_PROMPT);
        assert!(request.messages[1].content.contains("certified nutritionist"));
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_tokens, Some(2000));
        assert!(!request.stream);
    }

    #[tokio::test]
    async fn test_no_provider_serves_fallback() {
        let generator = PlanGenerator::new(None);
        assert!(!generator.has_remote());
        let plan = generator
            .generate(&PlanRequest::new(PlanKind::Workout, UserProfile::default()))
            .await;
        assert_eq!(plan.source(), PlanSource::Fallback);
    }
}
