// ABOUTME: Session store abstraction holding per-user profiles, plans and progress
// ABOUTME: Injected into handlers as a trait object so backends can be swapped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Store
//!
//! Per-user records keyed by an opaque user id. Reads for a user that never
//! wrote anything return empty lists or `None`, never an error. Lists keep
//! insertion order and are never deduplicated.
//!
//! Each method is atomic for its own user. Handlers that read and then write
//! are not, and may interleave with concurrent requests for the same user.

/// In-memory backend
pub mod memory;

pub use memory::InMemorySessionStore;

use crate::errors::AppResult;
use crate::models::{
    PlanEntry, ProgressEntry, StoredProfile, UserDataExport, UserProfile, WorkoutCompletion,
};
use async_trait::async_trait;

/// Storage backend for per-user session data
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Replace the user's profile, returning the stored copy
    async fn save_profile(&self, user_id: &str, profile: UserProfile) -> AppResult<StoredProfile>;

    /// Last saved profile
    async fn profile(&self, user_id: &str) -> AppResult<Option<StoredProfile>>;

    /// Append a workout entry
    async fn append_workout(&self, user_id: &str, entry: PlanEntry) -> AppResult<()>;

    /// Append a meal plan entry
    async fn append_meal(&self, user_id: &str, entry: PlanEntry) -> AppResult<()>;

    /// Append a progress entry
    async fn append_progress(&self, user_id: &str, entry: ProgressEntry) -> AppResult<()>;

    /// Mark a workout completed
    ///
    /// Returns the updated entry, or `None` when the user has no workout with
    /// that id.
    async fn complete_workout(
        &self,
        user_id: &str,
        workout_id: &str,
        completion: &WorkoutCompletion,
    ) -> AppResult<Option<PlanEntry>>;

    /// Workouts in insertion order
    async fn workouts(&self, user_id: &str) -> AppResult<Vec<PlanEntry>>;

    /// Meal plans in insertion order
    async fn meals(&self, user_id: &str) -> AppResult<Vec<PlanEntry>>;

    /// Progress entries in insertion order
    async fn progress(&self, user_id: &str) -> AppResult<Vec<ProgressEntry>>;

    /// Snapshot of everything held for the user
    async fn export(&self, user_id: &str) -> AppResult<UserDataExport>;
}
