// ABOUTME: Route handlers for saving and reading a user's fitness profile
// ABOUTME: Profiles are stored as submitted and replaced wholesale on every save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::default_user_id;
use crate::{errors::AppError, models::UserProfile, resources::ServerResources};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Body of `POST /api/save-profile`
#[derive(Debug, Deserialize)]
pub struct SaveProfileRequest {
    /// Profile owner
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Profile fields
    #[serde(default)]
    pub profile_data: Option<UserProfile>,
}

/// Profile routes handler
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/save-profile", post(Self::handle_save_profile))
            .route("/api/get-profile/:user_id", get(Self::handle_get_profile))
            .with_state(resources)
    }

    async fn handle_save_profile(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<SaveProfileRequest>,
    ) -> Result<impl IntoResponse, AppError> {
        info!(user.id = %body.user_id, "Saving profile");
        resources
            .store
            .save_profile(&body.user_id, body.profile_data.unwrap_or_default())
            .await?;

        Ok(Json(json!({
            "success": true,
            "message": "Profile saved successfully"
        })))
    }

    async fn handle_get_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<impl IntoResponse, AppError> {
        let profile = resources.store.profile(&user_id).await?;
        Ok(Json(json!({
            "success": true,
            "profile": profile
        })))
    }
}
