// ABOUTME: Route module organization for the FitCoach HTTP API
// ABOUTME: Groups endpoints by domain; handlers stay thin and delegate to services and the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the FitCoach server
//!
//! Each domain module exposes a `*Routes` type whose `routes` function returns
//! an axum `Router` with [`ServerResources`](crate::resources::ServerResources)
//! as state.

/// Coach chat routes
pub mod chat;
/// User data export routes
pub mod export;
/// Health check and readiness routes
pub mod health;
/// Workout and meal plan generation routes
pub mod plans;
/// Profile save and lookup routes
pub mod profile;
/// Meal logging and progress routes
pub mod progress;
/// Workout session routes
pub mod workouts;

pub use chat::ChatRoutes;
pub use export::ExportRoutes;
pub use health::HealthRoutes;
pub use plans::PlanRoutes;
pub use profile::ProfileRoutes;
pub use progress::ProgressRoutes;
pub use workouts::WorkoutRoutes;

use crate::constants::defaults::DEMO_USER_ID;
use serde_json::Value;

/// User id assumed when a request body omits one
pub(crate) fn default_user_id() -> String {
    DEMO_USER_ID.to_owned()
}

/// Numeric fields the caller may omit; whatever they send is stored as is
pub(crate) fn default_zero() -> Value {
    Value::from(0)
}
