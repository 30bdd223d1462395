// ABOUTME: Configuration module for the FitCoach server
// ABOUTME: Re-exports the environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, LogLevel, OpenRouterSettings, ServerConfig};
