// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads port, OpenRouter credentials and CORS origins once at process start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_config};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// `OpenRouter` chat-completion settings
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenRouterSettings {
    /// Bearer credential; `None` disables remote plan generation
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL, without the `/chat/completions` suffix
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// `HTTP-Referer` header value
    pub referer: String,
    /// `X-Title` header value
    pub title: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenRouterSettings {
    /// Whether a credential is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for OpenRouterSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: defaults::OPENROUTER_BASE_URL.to_owned(),
            model: defaults::OPENROUTER_MODEL.to_owned(),
            referer: defaults::OPENROUTER_REFERER.to_owned(),
            title: defaults::OPENROUTER_TITLE.to_owned(),
            timeout_secs: defaults::OPENROUTER_TIMEOUT_SECS,
        }
    }
}

// The credential must never reach logs through `{:?}`
impl fmt::Debug for OpenRouterSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; empty or `*` means any
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_owned()],
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Remote plan service settings
    pub openrouter: OpenRouterSettings,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            log_level: LogLevel::default(),
            environment: Environment::default(),
            openrouter: OpenRouterSettings::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Only the process environment is read; loading `.env` is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var(env_config::PORT).or_else(|_| env::var(env_config::HTTP_PORT)) {
            Ok(value) => value
                .trim()
                .parse()
                .with_context(|| format!("Invalid port value: {value}"))?,
            Err(_) => defaults::HTTP_PORT,
        };

        let timeout_secs: u64 = env_var_or(
            env_config::OPENROUTER_TIMEOUT_SECS,
            &defaults::OPENROUTER_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .context("Invalid OPENROUTER_TIMEOUT_SECS value")?;

        let api_key = env::var(env_config::OPENROUTER_API_KEY)
            .ok()
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty());

        Ok(Self {
            http_port,
            host: env_var_or(env_config::HOST, defaults::HOST),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_config::RUST_LOG, "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            openrouter: OpenRouterSettings {
                api_key,
                base_url: env_var_or(env_config::OPENROUTER_BASE_URL, defaults::OPENROUTER_BASE_URL),
                model: env_var_or(env_config::OPENROUTER_MODEL, defaults::OPENROUTER_MODEL),
                referer: env_var_or(env_config::OPENROUTER_REFERER, defaults::OPENROUTER_REFERER),
                title: env_var_or(env_config::OPENROUTER_TITLE, defaults::OPENROUTER_TITLE),
                timeout_secs,
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or(env_config::CORS_ALLOWED_ORIGINS, "*")),
            },
        })
    }

    /// One-line summary for startup logs; never includes the credential
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FitCoach Server Configuration: http={}:{}, environment={}, log_level={}, \
             openrouter={} (model={}, timeout={}s), cors={}",
            self.host,
            self.http_port,
            self.environment,
            self.log_level,
            if self.openrouter.has_api_key() {
                "enabled"
            } else {
                "disabled (fallback plans only)"
            },
            self.openrouter.model,
            self.openrouter.timeout_secs,
            self.cors.allowed_origins.join(","),
        )
    }
}

/// Read an environment variable, falling back to `default` when unset
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("anything"),
            Environment::Development
        );
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("https://a.example, ,https://b.example"),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = OpenRouterSettings {
            api_key: Some("sk-or-v1-secret".to_owned()),
            ..OpenRouterSettings::default()
        };

        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("sk-or-v1-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_summary_without_key() {
        let config = ServerConfig::default();
        let summary = config.summary();
        assert!(summary.contains("disabled (fallback plans only)"));
        assert!(summary.contains(":10000"));
    }
}
