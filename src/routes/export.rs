// ABOUTME: Route handler exporting all data held for a user as a JSON download
// ABOUTME: Returns a pretty-printed attachment named after the user id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{errors::AppError, resources::ServerResources};
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::info;

/// Export routes handler
pub struct ExportRoutes;

impl ExportRoutes {
    /// Create all export routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/export-data/:user_id", get(Self::handle_export))
            .with_state(resources)
    }

    async fn handle_export(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<impl IntoResponse, AppError> {
        let export = resources.store.export(&user_id).await?;
        let body = serde_json::to_string_pretty(&export)?;
        info!(
            user.id = %user_id,
            workouts = export.workouts.len(),
            meals = export.meals.len(),
            progress = export.progress.len(),
            "User data exported"
        );

        Ok((
            [
                (header::CONTENT_TYPE, "application/json".to_owned()),
                (
                    header::CONTENT_DISPOSITION,
                    format!(
                        "attachment; filename=\"{}\"",
                        export_filename(&user_id)
                    ),
                ),
            ],
            body,
        ))
    }
}

/// Download file name; characters outside `[A-Za-z0-9_-]` become `_`
#[must_use]
pub fn export_filename(user_id: &str) -> String {
    let safe: String = user_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("fitness_data_{safe}.json")
}

#[cfg(test)]
mod tests {
    use super::export_filename;

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("u1"), "fitness_data_u1.json");
        assert_eq!(export_filename("a\"b/c"), "fitness_data_a_b_c.json");
    }
}
