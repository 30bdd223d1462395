// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides stub LLM providers, wiremock-backed providers and resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `fitcoach_server`

use async_trait::async_trait;
use axum::Router;
use fitcoach_server::{
    config::{Environment, ServerConfig},
    llm::{ChatRequest, ChatResponse, LlmError, LlmProvider, OpenRouterConfig, OpenRouterProvider},
    resources::ServerResources,
    server::FitCoachServer,
    store::InMemorySessionStore,
};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Provider returning a canned outcome and recording what it was asked
pub struct StubProvider {
    outcome: Result<String, LlmError>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl StubProvider {
    /// Provider that always answers with `text`
    pub fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_owned()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Provider that always fails with `error`
    pub fn failing(error: LlmError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Number of completion calls received
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn display_name(&self) -> &'static str {
        "OpenRouter"
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.clone().map(|content| ChatResponse {
            content,
            model: "stub-model".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }
}

/// Configuration used by tests: defaults, testing environment, no credential
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        ..ServerConfig::default()
    }
}

/// `OpenRouter` provider pointed at a mock server
pub fn openrouter_provider(mock_uri: &str, timeout: Duration) -> Arc<OpenRouterProvider> {
    let config = OpenRouterConfig {
        base_url: format!("{mock_uri}/api/v1"),
        api_key: "sk-or-test-key".to_owned(),
        default_model: "deepseek/deepseek-r1:free".to_owned(),
        referer: "http://localhost:5000".to_owned(),
        title: "FitCoach AI".to_owned(),
        timeout,
    };
    Arc::new(OpenRouterProvider::new(config).expect("provider builds"))
}

/// Resources with an in-memory store and the given provider
pub fn create_test_resources(provider: Option<Arc<dyn LlmProvider>>) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(
        Arc::new(test_config()),
        Arc::new(InMemorySessionStore::new()),
        provider,
    ))
}

/// Full application router over the given resources
pub fn create_test_router(resources: Arc<ServerResources>) -> Router {
    FitCoachServer::new(resources).router()
}
