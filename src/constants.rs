// ABOUTME: Application constants for the FitCoach API grouped by domain
// ABOUTME: Environment variable names, defaults, LLM request parameters and progress kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules instead of living at the top level.

/// Environment variable names read once at startup
pub mod env_config {
    /// Listen port (hosting platforms set this one)
    pub const PORT: &str = "PORT";
    /// Listen port, alternative name
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const RUST_LOG: &str = "RUST_LOG";
    /// `OpenRouter` credential
    pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
    /// `OpenRouter` API base URL
    pub const OPENROUTER_BASE_URL: &str = "OPENROUTER_BASE_URL";
    /// Model identifier sent with every completion request
    pub const OPENROUTER_MODEL: &str = "OPENROUTER_MODEL";
    /// Value of the `HTTP-Referer` header
    pub const OPENROUTER_REFERER: &str = "OPENROUTER_REFERER";
    /// Value of the `X-Title` header
    pub const OPENROUTER_TITLE: &str = "OPENROUTER_TITLE";
    /// Request timeout in seconds
    pub const OPENROUTER_TIMEOUT_SECS: &str = "OPENROUTER_TIMEOUT_SECS";
    /// Comma-separated CORS origins, `*` for any
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Default configuration values
pub mod defaults {
    /// Default listen port
    pub const HTTP_PORT: u16 = 10000;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// `OpenRouter` API base URL
    pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
    /// Free `DeepSeek` R1 model on `OpenRouter`
    pub const OPENROUTER_MODEL: &str = "deepseek/deepseek-r1:free";
    /// Referer advertised to `OpenRouter`
    pub const OPENROUTER_REFERER: &str = "http://localhost:5000";
    /// Application title advertised to `OpenRouter`
    pub const OPENROUTER_TITLE: &str = "FitCoach AI";
    /// Remote call timeout
    pub const OPENROUTER_TIMEOUT_SECS: u64 = 30;
    /// User id assumed when a request omits one
    pub const DEMO_USER_ID: &str = "demo-user";
    /// Workout type assumed by start-workout
    pub const WORKOUT_TYPE: &str = "general";
    /// Meal type assumed by log-meal
    pub const MEAL_TYPE: &str = "general";
}

/// Decoding parameters for completion requests
pub mod llm {
    /// Sampling temperature
    pub const TEMPERATURE: f32 = 0.7;
    /// Maximum output tokens
    pub const MAX_TOKENS: u32 = 2000;
    /// Provider display name used in user-facing chat errors
    pub const OPENROUTER_DISPLAY_NAME: &str = "OpenRouter";
}

/// Service names for structured logging
pub mod service_names {
    /// FitCoach server service name
    pub const FITCOACH_SERVER: &str = "fitcoach-server";
}

/// Entry id prefixes
pub mod id_prefixes {
    /// Generated or started workouts
    pub const WORKOUT: &str = "workout";
    /// Generated meal plans
    pub const MEAL: &str = "meal";
}
