// ABOUTME: CORS middleware configuration for the FitCoach HTTP API
// ABOUTME: Builds a tower-http CorsLayer from the configured origin list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS for the API
///
/// Origins come from `CORS_ALLOWED_ORIGINS`. An empty list or a `*` entry
/// allows any origin; otherwise only the listed origins are allowed. Entries
/// that are not valid header values are skipped.
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins (production)
/// export CORS_ALLOWED_ORIGINS="https://fitcoach.example.com,https://admin.example.com"
/// ```
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(&config.cors.allowed_origins))
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

fn allow_origin(allowed: &[String]) -> AllowOrigin {
    if allowed.is_empty() || allowed.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = allowed
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok())
        .collect();

    if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CorsConfig;

    fn config(origins: &[&str]) -> ServerConfig {
        ServerConfig {
            cors: CorsConfig {
                allowed_origins: origins.iter().map(|&o| o.to_owned()).collect(),
            },
            ..ServerConfig::default()
        }
    }

    #[test]
    fn test_wildcard_and_list_build() {
        let _any = setup_cors(&config(&["*"]));
        let _none = setup_cors(&config(&[]));
        let _list = setup_cors(&config(&["https://a.example.com", "https://b.example.com"]));
    }
}
