// ABOUTME: Main library entry point for the FitCoach AI backend
// ABOUTME: Personalized workout and meal plans with a static fallback, plus per-user session tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitCoach Server
//!
//! An HTTP backend that turns a user's fitness profile into a workout or meal
//! plan by asking a remote language model through `OpenRouter`. When the
//! model is unreachable, slow or returns an error, a fixed beginner plan is
//! served instead, so plan endpoints always succeed.
//!
//! ## Features
//!
//! - **Plan generation**: remote-first, fallback on any failure, `plan_source` in every response
//! - **Session tracking**: workouts, meal plans, progress entries and profile per user id
//! - **Coach chat**: free-text fitness questions answered by the same model
//! - **Export**: one JSON download with everything held for a user
//!
//! ## Architecture
//!
//! - **llm**: provider trait, `OpenRouter` client and prompt templates
//! - **services**: plan orchestration, fallback plans and coach chat
//! - **store**: injected session store (in-memory backend)
//! - **routes**: thin axum handlers grouped by domain
//! - **server**: router assembly, middleware and the listener
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitcoach_server::config::ServerConfig;
//! use fitcoach_server::resources::ServerResources;
//! use fitcoach_server::server::FitCoachServer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let (host, port) = (config.host.clone(), config.http_port);
//!     let resources = Arc::new(ServerResources::from_config(config)?);
//!     FitCoachServer::new(resources).run(&host, port).await?;
//!     Ok(())
//! }
//! ```

/// Configuration loaded from the environment
pub mod config;

/// Application constants grouped by domain
pub mod constants;

/// Unified error handling
pub mod errors;

/// Remote chat-completion providers and prompt templates
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Profiles, plans and session records
pub mod models;

/// Shared resources injected into handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and listener
pub mod server;

/// Plan generation, fallback plans and coach chat
pub mod services;

/// Per-user session storage
pub mod store;
