// ABOUTME: Centralized resource container shared by every HTTP handler
// ABOUTME: Holds configuration, the session store and the remote-backed services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once at startup and shared behind an `Arc` as axum state. Tests build
//! it with [`ServerResources::new`] to inject a stub provider or another store.

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::llm::{LlmProvider, OpenRouterConfig, OpenRouterProvider};
use crate::services::{CoachChat, PlanGenerator};
use crate::store::{InMemorySessionStore, SessionStore};
use std::sync::Arc;
use tracing::info;

/// Shared state for route handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Per-user session data
    pub store: Arc<dyn SessionStore>,
    /// Remote-first plan generation
    pub plan_generator: PlanGenerator,
    /// Coaching question answering
    pub coach_chat: CoachChat,
}

impl ServerResources {
    /// Assemble resources from explicit parts
    #[must_use]
    pub fn new(
        config: Arc<ServerConfig>,
        store: Arc<dyn SessionStore>,
        provider: Option<Arc<dyn LlmProvider>>,
    ) -> Self {
        Self {
            config,
            store,
            plan_generator: PlanGenerator::new(provider.clone()),
            coach_chat: CoachChat::new(provider),
        }
    }

    /// Production wiring: in-memory store and `OpenRouter` when a key is configured
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for the remote provider cannot be built
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let provider: Option<Arc<dyn LlmProvider>> =
            match OpenRouterConfig::from_server_config(&config) {
                Some(openrouter) => Some(Arc::new(OpenRouterProvider::new(openrouter)?)),
                None => {
                    info!("Remote plan generation disabled, fallback plans only");
                    None
                }
            };

        Ok(Self::new(
            Arc::new(config),
            Arc::new(InMemorySessionStore::new()),
            provider,
        ))
    }

    /// Whether plans can come from the remote model
    #[must_use]
    pub const fn remote_plans_enabled(&self) -> bool {
        self.plan_generator.has_remote()
    }
}
