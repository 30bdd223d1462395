// ABOUTME: Integration tests for environment-driven server configuration
// ABOUTME: Validates defaults, overrides, port parsing errors and credential handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitcoach_server::config::{Environment, LogLevel, ServerConfig};
use fitcoach_server::llm::OpenRouterConfig;
use serial_test::serial;
use std::env;
use std::time::Duration;

const MANAGED_VARS: [&str; 12] = [
    "PORT",
    "HTTP_PORT",
    "HOST",
    "ENVIRONMENT",
    "RUST_LOG",
    "OPENROUTER_API_KEY",
    "OPENROUTER_BASE_URL",
    "OPENROUTER_MODEL",
    "OPENROUTER_REFERER",
    "OPENROUTER_TITLE",
    "OPENROUTER_TIMEOUT_SECS",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_env() {
    for key in MANAGED_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 10000);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(!config.openrouter.has_api_key());
    assert_eq!(config.openrouter.base_url, "https://openrouter.ai/api/v1");
    assert_eq!(config.openrouter.model, "deepseek/deepseek-r1:free");
    assert_eq!(config.openrouter.referer, "http://localhost:5000");
    assert_eq!(config.openrouter.title, "FitCoach AI");
    assert_eq!(config.openrouter.timeout(), Duration::from_secs(30));
    assert_eq!(config.cors.allowed_origins, vec!["*"]);
    assert!(OpenRouterConfig::from_server_config(&config).is_none());
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var("PORT", "8080");
    env::set_var("HOST", "127.0.0.1");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("OPENROUTER_API_KEY", "sk-or-v1-0123456789");
    env::set_var("OPENROUTER_MODEL", "meta-llama/llama-3.1-8b-instruct");
    env::set_var("OPENROUTER_TIMEOUT_SECS", "12");
    env::set_var(
        "CORS_ALLOWED_ORIGINS",
        "https://fitcoach.example.com, https://admin.example.com",
    );

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 8080);
    assert_eq!(config.host, "127.0.0.1");
    assert!(config.environment.is_production());
    assert!(config.openrouter.has_api_key());
    assert_eq!(config.openrouter.timeout_secs, 12);
    assert_eq!(
        config.cors.allowed_origins,
        vec!["https://fitcoach.example.com", "https://admin.example.com"]
    );

    let openrouter = OpenRouterConfig::from_server_config(&config).unwrap();
    assert_eq!(openrouter.default_model, "meta-llama/llama-3.1-8b-instruct");
    assert_eq!(openrouter.timeout, Duration::from_secs(12));

    let summary = config.summary();
    assert!(!summary.contains("0123456789"));
    assert!(summary.contains("openrouter=enabled"));
}

#[test]
#[serial]
fn test_http_port_used_when_port_missing() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    let config = ServerConfig::from_env().unwrap();
    clear_env();
    assert_eq!(config.http_port, 9090);
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_env();
    env::set_var("PORT", "not-a-port");
    let result = ServerConfig::from_env();
    clear_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_blank_api_key_counts_as_missing() {
    clear_env();
    env::set_var("OPENROUTER_API_KEY", "   ");
    let config = ServerConfig::from_env().unwrap();
    clear_env();
    assert!(!config.openrouter.has_api_key());
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("warn"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
    assert_eq!(LogLevel::Warn.to_string(), "warn");
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("prod"), Environment::Production);
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("anything-else"),
        Environment::Development
    );
    assert!(!Environment::Development.is_production());
}
