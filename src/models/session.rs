// ABOUTME: Per-user session records: plan entries, progress entries and saved profile
// ABOUTME: Also defines the data export document returned by the export endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{PlanResult, PlanSource, UserProfile};
use crate::constants::id_prefixes;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Lifecycle of a workout or meal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Plan generated, not started
    Generated,
    /// Workout session started
    InProgress,
    /// Workout session completed
    Completed,
}

/// A workout or meal plan entry in a user's session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Entry id (`workout_<hex>` or `meal_<hex>`)
    pub id: String,
    /// Generated plan, absent for ad-hoc started workouts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanResult>,
    /// Where the plan came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_source: Option<PlanSource>,
    /// Profile the plan was generated for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    /// Workout type for started workouts
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<String>,
    /// Current status
    pub status: EntryStatus,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Session start time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    /// Session completion time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Session length in minutes, as reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    /// Exercises the user reported as done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises_completed: Option<Vec<Value>>,
}

impl PlanEntry {
    /// New entry holding a freshly generated plan
    #[must_use]
    pub fn generated(prefix: &str, plan: PlanResult, profile: UserProfile) -> Self {
        Self {
            id: new_entry_id(prefix),
            plan_source: Some(plan.source()),
            plan: Some(plan),
            profile: Some(profile),
            workout_type: None,
            status: EntryStatus::Generated,
            created_at: Utc::now(),
            started_at: None,
            completed_at: None,
            duration: None,
            exercises_completed: None,
        }
    }

    /// New in-progress workout without a generated plan
    #[must_use]
    pub fn started_workout(workout_type: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: new_entry_id(id_prefixes::WORKOUT),
            plan: None,
            plan_source: None,
            profile: None,
            workout_type: Some(workout_type.into()),
            status: EntryStatus::InProgress,
            created_at: now,
            started_at: Some(now),
            completed_at: None,
            duration: None,
            exercises_completed: None,
        }
    }

    /// Mark this entry completed with the reported session details
    pub fn complete(&mut self, completion: &WorkoutCompletion) {
        self.status = EntryStatus::Completed;
        self.completed_at = Some(Utc::now());
        self.duration = Some(completion.duration.clone());
        self.exercises_completed = Some(completion.exercises_completed.clone());
    }
}

/// Details reported when a workout is completed
///
/// Values are kept exactly as the caller sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutCompletion {
    /// Session length in minutes
    pub duration: Value,
    /// Exercises the user reported as done
    pub exercises_completed: Vec<Value>,
}

impl Default for WorkoutCompletion {
    fn default() -> Self {
        Self {
            duration: Value::from(0),
            exercises_completed: Vec::new(),
        }
    }
}

/// Kind of a progress entry
///
/// The three built-in kinds are recorded by the workout and meal endpoints;
/// anything else is a caller-defined measurement such as `weight`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressKind {
    /// A workout session was started
    WorkoutStarted,
    /// A workout session was completed
    WorkoutCompleted,
    /// A meal was logged
    MealLogged,
    /// Caller-defined measurement
    #[serde(untagged)]
    Custom(String),
}

impl ProgressKind {
    /// Parse a caller-supplied kind, mapping built-in names to their variants
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "workout_started" => Self::WorkoutStarted,
            "workout_completed" => Self::WorkoutCompleted,
            "meal_logged" => Self::MealLogged,
            other => Self::Custom(other.to_owned()),
        }
    }

    /// Kind name as stored in the `type` field
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::WorkoutStarted => "workout_started",
            Self::WorkoutCompleted => "workout_completed",
            Self::MealLogged => "meal_logged",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for ProgressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamped record of a user action or measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Entry kind
    #[serde(rename = "type")]
    pub kind: ProgressKind,
    /// Measured value for custom kinds; always present, `null` when absent
    #[serde(default)]
    pub value: Option<Value>,
    /// Related workout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<String>,
    /// Workout type for `workout_started`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<String>,
    /// Session minutes for `workout_completed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    /// Number of exercises done for `workout_completed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises_completed: Option<usize>,
    /// Meal slot for `meal_logged`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    /// Foods eaten for `meal_logged`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_items: Option<Vec<Value>>,
    /// Calories for `meal_logged`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<Value>,
    /// Date the entry refers to (caller-supplied or now)
    pub date: String,
    /// Server time the entry was recorded
    pub timestamp: DateTime<Utc>,
}

impl ProgressEntry {
    fn base(kind: ProgressKind, date: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            kind,
            value: None,
            workout_id: None,
            workout_type: None,
            duration: None,
            exercises_completed: None,
            meal_type: None,
            food_items: None,
            calories: None,
            date: date.unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            timestamp: now,
        }
    }

    /// Caller-defined measurement such as `weight`
    #[must_use]
    pub fn measurement(kind: &str, value: Option<Value>, date: Option<String>) -> Self {
        Self {
            value,
            ..Self::base(ProgressKind::from_name(kind), date)
        }
    }

    /// Workout session started
    #[must_use]
    pub fn workout_started(workout_id: &str, workout_type: &str) -> Self {
        Self {
            workout_id: Some(workout_id.to_owned()),
            workout_type: Some(workout_type.to_owned()),
            ..Self::base(ProgressKind::WorkoutStarted, None)
        }
    }

    /// Workout session completed; the workout id is not checked
    #[must_use]
    pub fn workout_completed(workout_id: Option<String>, completion: &WorkoutCompletion) -> Self {
        Self {
            workout_id,
            duration: Some(completion.duration.clone()),
            exercises_completed: Some(completion.exercises_completed.len()),
            ..Self::base(ProgressKind::WorkoutCompleted, None)
        }
    }

    /// Meal logged
    #[must_use]
    pub fn meal_logged(meal_type: &str, food_items: Vec<Value>, calories: Value) -> Self {
        Self {
            meal_type: Some(meal_type.to_owned()),
            food_items: Some(food_items),
            calories: Some(calories),
            ..Self::base(ProgressKind::MealLogged, None)
        }
    }
}

/// Last saved profile for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Profile data as submitted
    pub profile: UserProfile,
    /// When it was saved
    pub updated_at: DateTime<Utc>,
}

/// Everything the server holds for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Owner
    pub user_id: String,
    /// Last saved profile
    pub profile: Option<StoredProfile>,
    /// Generated and started workouts, in insertion order
    pub workouts: Vec<PlanEntry>,
    /// Generated meal plans, in insertion order
    pub meals: Vec<PlanEntry>,
    /// Progress entries, in insertion order
    pub progress: Vec<ProgressEntry>,
}

impl SessionRecord {
    /// Empty record for a user
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            profile: None,
            workouts: Vec::new(),
            meals: Vec::new(),
            progress: Vec::new(),
        }
    }
}

/// Downloadable copy of a user's data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDataExport {
    /// Last saved profile
    pub profile: Option<StoredProfile>,
    /// Workouts
    pub workouts: Vec<PlanEntry>,
    /// Meal plans
    pub meals: Vec<PlanEntry>,
    /// Progress entries
    pub progress: Vec<ProgressEntry>,
    /// Export time
    pub exported_at: DateTime<Utc>,
}

impl From<SessionRecord> for UserDataExport {
    fn from(record: SessionRecord) -> Self {
        Self {
            profile: record.profile,
            workouts: record.workouts,
            meals: record.meals,
            progress: record.progress,
            exported_at: Utc::now(),
        }
    }
}

/// New entry id with the given prefix
#[must_use]
pub fn new_entry_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}
