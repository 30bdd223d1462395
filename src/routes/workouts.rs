// ABOUTME: Route handlers for workout sessions: start, complete and list
// ABOUTME: Every start and completion is also recorded as a progress entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{default_user_id, default_zero};
use crate::{
    constants::defaults,
    errors::AppError,
    logging::AppLogger,
    models::{PlanEntry, ProgressEntry, WorkoutCompletion},
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
use tracing::info;

fn default_workout_type() -> String {
    defaults::WORKOUT_TYPE.to_owned()
}

/// Body of `POST /api/start-workout`
#[derive(Debug, Deserialize)]
pub struct StartWorkoutRequest {
    /// Session owner
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Free-form workout type
    #[serde(default = "default_workout_type")]
    pub workout_type: String,
}

/// Body of `POST /api/complete-workout`
#[derive(Debug, Deserialize)]
pub struct CompleteWorkoutRequest {
    /// Session owner
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Workout to mark completed; unknown ids are still logged as progress
    #[serde(default)]
    pub workout_id: Option<String>,
    /// Minutes spent, stored as sent
    #[serde(default = "default_zero")]
    pub duration: Value,
    /// Exercises done
    #[serde(default)]
    pub exercises_completed: Vec<Value>,
}

/// Response of `POST /api/start-workout`
#[derive(Debug, Serialize)]
pub struct StartWorkoutResponse {
    /// Always true
    pub success: bool,
    /// Human-readable status
    pub message: &'static str,
    /// Id of the new workout
    pub workout_id: String,
    /// The stored workout entry
    pub workout: PlanEntry,
}

/// Response of `POST /api/complete-workout`
#[derive(Debug, Serialize)]
pub struct CompleteWorkoutResponse {
    /// Always true
    pub success: bool,
    /// Human-readable status
    pub message: &'static str,
    /// Updated workout, `null` when the id was not found
    pub workout: Option<PlanEntry>,
}

/// Workout session routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/start-workout", post(Self::handle_start_workout))
            .route("/api/complete-workout", post(Self::handle_complete_workout))
            .route("/api/get-workouts/:user_id", get(Self::handle_get_workouts))
            .with_state(resources)
    }

    async fn handle_start_workout(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<StartWorkoutRequest>,
    ) -> Result<impl IntoResponse, AppError> {
        info!(user.id = %body.user_id, workout.kind = %body.workout_type, "Starting workout");

        let workout = PlanEntry::started_workout(body.workout_type.clone());
        let workout_id = workout.id.clone();
        resources
            .store
            .append_workout(&body.user_id, workout.clone())
            .await?;

        let progress = ProgressEntry::workout_started(&workout_id, &body.workout_type);
        AppLogger::log_progress_event(&body.user_id, progress.kind.as_str());
        resources
            .store
            .append_progress(&body.user_id, progress)
            .await?;

        Ok(Json(StartWorkoutResponse {
            success: true,
            message: "Workout started successfully",
            workout_id,
            workout,
        }))
    }

    async fn handle_complete_workout(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CompleteWorkoutRequest>,
    ) -> Result<impl IntoResponse, AppError> {
        info!(
            user.id = %body.user_id,
            workout.id = body.workout_id.as_deref().unwrap_or("<none>"),
            "Completing workout"
        );

        let completion = WorkoutCompletion {
            duration: body.duration,
            exercises_completed: body.exercises_completed,
        };

        let workout = match body.workout_id.as_deref() {
            Some(workout_id) => {
                resources
                    .store
                    .complete_workout(&body.user_id, workout_id, &completion)
                    .await?
            }
            None => None,
        };

        let progress = ProgressEntry::workout_completed(body.workout_id, &completion);
        AppLogger::log_progress_event(&body.user_id, progress.kind.as_str());
        resources
            .store
            .append_progress(&body.user_id, progress)
            .await?;

        Ok(Json(CompleteWorkoutResponse {
            success: true,
            message: "Workout completed successfully",
            workout,
        }))
    }

    async fn handle_get_workouts(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<impl IntoResponse, AppError> {
        let workouts = resources.store.workouts(&user_id).await?;
        Ok(Json(serde_json::json!({
            "success": true,
            "workouts": workouts
        })))
    }
}
