// ABOUTME: Route handlers for workout and meal plan generation
// ABOUTME: Generates a plan (remote or fallback), stores it as a session entry and returns its id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan generation routes
//!
//! Remote failures never surface here: the plan generator substitutes a
//! static plan and the response says so through `plan_source`.

use super::default_user_id;
use crate::{
    constants::id_prefixes,
    errors::AppError,
    logging::AppLogger,
    models::{PlanEntry, PlanKind, PlanRequest, PlanResult, PlanSource, UserProfile},
    resources::ServerResources,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Body of the plan generation endpoints
#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    /// Owner of the new entry
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Profile used to personalize the prompt
    #[serde(default)]
    pub user_data: Option<UserProfile>,
}

/// Response of `POST /api/generate-workout`
#[derive(Debug, Serialize)]
pub struct WorkoutPlanResponse {
    /// Always true
    pub success: bool,
    /// Remote text or static plan object
    pub workout_plan: PlanResult,
    /// Id of the stored entry
    pub workout_id: String,
    /// Where the plan came from
    pub plan_source: PlanSource,
}

/// Response of `POST /api/generate-meal-plan`
#[derive(Debug, Serialize)]
pub struct MealPlanResponse {
    /// Always true
    pub success: bool,
    /// Remote text or static plan object
    pub meal_plan: PlanResult,
    /// Id of the stored entry
    pub meal_plan_id: String,
    /// Where the plan came from
    pub plan_source: PlanSource,
}

/// Plan routes handler
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/generate-workout", post(Self::handle_generate_workout))
            .route("/api/generate-meal-plan", post(Self::handle_generate_meal_plan))
            .route("/api/get-meals/:user_id", get(Self::handle_get_meals))
            .with_state(resources)
    }

    async fn handle_generate_workout(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<GeneratePlanRequest>,
    ) -> Result<impl IntoResponse, AppError> {
        let (workout_id, plan) = Self::generate_and_store(&resources, PlanKind::Workout, body).await?;
        Ok(Json(WorkoutPlanResponse {
            success: true,
            plan_source: plan.source(),
            workout_plan: plan,
            workout_id,
        }))
    }

    async fn handle_generate_meal_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<GeneratePlanRequest>,
    ) -> Result<impl IntoResponse, AppError> {
        let (meal_plan_id, plan) = Self::generate_and_store(&resources, PlanKind::Diet, body).await?;
        Ok(Json(MealPlanResponse {
            success: true,
            plan_source: plan.source(),
            meal_plan: plan,
            meal_plan_id,
        }))
    }

    async fn handle_get_meals(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<impl IntoResponse, AppError> {
        let meals = resources.store.meals(&user_id).await?;
        Ok(Json(serde_json::json!({
            "success": true,
            "meals": meals
        })))
    }

    async fn generate_and_store(
        resources: &ServerResources,
        kind: PlanKind,
        body: GeneratePlanRequest,
    ) -> Result<(String, PlanResult), AppError> {
        let user_id = body.user_id;
        let profile = body.user_data.unwrap_or_default();
        info!(user.id = %user_id, plan.kind = %kind, "Generating plan");

        let plan = resources
            .plan_generator
            .generate(&PlanRequest::new(kind, profile.clone()))
            .await;

        let prefix = match kind {
            PlanKind::Workout => id_prefixes::WORKOUT,
            PlanKind::Diet => id_prefixes::MEAL,
        };
        let entry = PlanEntry::generated(prefix, plan.clone(), profile);
        let entry_id = entry.id.clone();

        match kind {
            PlanKind::Workout => resources.store.append_workout(&user_id, entry).await?,
            PlanKind::Diet => resources.store.append_meal(&user_id, entry).await?,
        }

        AppLogger::log_plan_generated(&user_id, kind, plan.source(), &entry_id);
        Ok((entry_id, plan))
    }
}
