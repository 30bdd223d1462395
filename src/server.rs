// ABOUTME: HTTP server assembly: merges domain routes, applies tracing and CORS layers
// ABOUTME: Binds the listener and serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::middleware::{setup_cors, with_request_tracing};
use crate::resources::ServerResources;
use crate::routes::{
    ChatRoutes, ExportRoutes, HealthRoutes, PlanRoutes, ProfileRoutes, ProgressRoutes,
    WorkoutRoutes,
};
use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// FitCoach HTTP server
pub struct FitCoachServer {
    resources: Arc<ServerResources>,
}

impl FitCoachServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Complete application router with middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        let resources = &self.resources;
        Router::new()
            .merge(HealthRoutes::routes(Arc::clone(resources)))
            .merge(PlanRoutes::routes(Arc::clone(resources)))
            .merge(WorkoutRoutes::routes(Arc::clone(resources)))
            .merge(ProgressRoutes::routes(Arc::clone(resources)))
            .merge(ProfileRoutes::routes(Arc::clone(resources)))
            .merge(ExportRoutes::routes(Arc::clone(resources)))
            .merge(ChatRoutes::routes(Arc::clone(resources)))
            .route("/favicon.ico", get(|| async { StatusCode::NO_CONTENT }))
            .layer(with_request_tracing())
            .layer(setup_cors(&resources.config))
    }

    /// Bind and serve until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self, host: &str, port: u16) -> AppResult<()> {
        let address = format!("{host}:{port}");
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            AppError::internal(format!("Failed to bind {address}")).with_source(e)
        })?;

        info!("HTTP server listening on http://{address}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal("HTTP server error").with_source(e))?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
