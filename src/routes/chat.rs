// ABOUTME: Chat route handler for free-text fitness questions
// ABOUTME: Remote failures come back as reply text; only an empty question is a client error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coach chat routes
//!
//! The caller's `Host` header becomes the `HTTP-Referer` sent upstream so the
//! remote service attributes traffic to the deployed site. The listener only
//! speaks plain HTTP, so the scheme is `http` unless a proxy reports otherwise
//! through `X-Forwarded-Proto`.

use crate::{errors::AppError, resources::ServerResources};
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Body of `POST /api/chat`
#[derive(Debug, Deserialize)]
pub struct ChatQuestionRequest {
    /// Free-text question
    #[serde(default)]
    pub question: String,
}

/// Response of `POST /api/chat`
#[derive(Debug, Serialize)]
pub struct ChatAnswerResponse {
    /// True whenever the question was accepted, including remote failures
    pub success: bool,
    /// Model answer or failure description
    pub response: String,
}

/// Chat routes handler
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create all chat routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/chat", post(Self::handle_chat))
            .with_state(resources)
    }

    async fn handle_chat(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<ChatQuestionRequest>,
    ) -> Result<impl IntoResponse, AppError> {
        if body.question.is_empty() {
            return Err(AppError::invalid_input("No question provided"));
        }

        let referer = caller_origin(&headers);
        info!(referer = referer.as_deref().unwrap_or("<default>"), "Chat question received");

        let response = resources
            .coach_chat
            .ask(&body.question, referer.as_deref())
            .await;

        Ok(Json(ChatAnswerResponse {
            success: true,
            response,
        }))
    }
}

/// `<scheme>://<host>` of the request as the caller addressed it
fn caller_origin(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(header::HOST)?.to_str().ok()?;
    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|scheme| !scheme.is_empty())
        .unwrap_or("http");
    Some(format!("{scheme}://{host}"))
}
