// ABOUTME: Data models for profiles, plans and per-user session records
// ABOUTME: Shared by the plan services, the session store and the HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - **profile**: free-form [`UserProfile`]
//! - **plan**: [`PlanKind`], [`PlanRequest`], and the [`PlanResult`] sum type that
//!   separates model output from static fallback content
//! - **session**: [`PlanEntry`], [`ProgressEntry`], [`SessionRecord`] and the export document

/// Plan kinds, requests and results
pub mod plan;
/// User fitness profile
pub mod profile;
/// Per-user session records
pub mod session;

pub use plan::{
    DietPlan, Exercise, FallbackPlan, MacroSplit, MealSlot, PlanKind, PlanRequest, PlanResult,
    PlanSource, WorkoutPlan,
};
pub use profile::UserProfile;
pub use session::{
    new_entry_id, EntryStatus, PlanEntry, ProgressEntry, ProgressKind, SessionRecord,
    StoredProfile, UserDataExport, WorkoutCompletion,
};
