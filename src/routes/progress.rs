// ABOUTME: Route handlers for meal logging and free-form progress tracking
// ABOUTME: Appends timestamped progress entries and lists them in insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{default_user_id, default_zero};
use crate::{
    constants::defaults,
    errors::AppError,
    logging::AppLogger,
    models::ProgressEntry,
    resources::ServerResources,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

fn default_meal_type() -> String {
    defaults::MEAL_TYPE.to_owned()
}

/// Body of `POST /api/log-meal`
#[derive(Debug, Deserialize)]
pub struct LogMealRequest {
    /// Owner
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Meal slot (breakfast, lunch, dinner, snack...)
    #[serde(default = "default_meal_type")]
    pub meal_type: String,
    /// Foods eaten
    #[serde(default)]
    pub food_items: Vec<Value>,
    /// Calories eaten, stored as sent
    #[serde(default = "default_zero")]
    pub calories: Value,
}

/// Body of `POST /api/log-progress`
#[derive(Debug, Deserialize)]
pub struct LogProgressRequest {
    /// Owner
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Measurement name such as `weight`; required
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Measured value
    #[serde(default)]
    pub value: Option<Value>,
    /// Date the measurement refers to; defaults to now
    #[serde(default)]
    pub date: Option<String>,
}

/// Response of `POST /api/log-meal`
#[derive(Debug, Serialize)]
pub struct LogMealResponse {
    /// Always true
    pub success: bool,
    /// `"<Meal type> logged successfully"`
    pub message: String,
    /// The stored progress entry
    pub meal_entry: ProgressEntry,
}

/// Progress routes handler
pub struct ProgressRoutes;

impl ProgressRoutes {
    /// Create all progress routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/log-meal", post(Self::handle_log_meal))
            .route("/api/log-progress", post(Self::handle_log_progress))
            .route("/api/get-progress/:user_id", get(Self::handle_get_progress))
            .with_state(resources)
    }

    async fn handle_log_meal(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<LogMealRequest>,
    ) -> Result<impl IntoResponse, AppError> {
        let entry = ProgressEntry::meal_logged(&body.meal_type, body.food_items, body.calories);
        resources
            .store
            .append_progress(&body.user_id, entry.clone())
            .await?;
        AppLogger::log_progress_event(&body.user_id, entry.kind.as_str());

        Ok(Json(LogMealResponse {
            success: true,
            message: format!("{} logged successfully", capitalize(&body.meal_type)),
            meal_entry: entry,
        }))
    }

    async fn handle_log_progress(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<LogProgressRequest>,
    ) -> Result<impl IntoResponse, AppError> {
        let kind = body
            .kind
            .as_deref()
            .filter(|kind| !kind.is_empty())
            .ok_or_else(|| AppError::missing_field("Progress type is required"))?;

        let entry = ProgressEntry::measurement(kind, body.value, body.date);
        resources.store.append_progress(&body.user_id, entry).await?;
        AppLogger::log_progress_event(&body.user_id, kind);

        Ok(Json(serde_json::json!({
            "success": true,
            "message": "Progress logged successfully"
        })))
    }

    async fn handle_get_progress(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<impl IntoResponse, AppError> {
        let progress = resources.store.progress(&user_id).await?;
        Ok(Json(serde_json::json!({
            "success": true,
            "progress": progress
        })))
    }
}

/// First character upper-cased, the rest lower-cased
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
