// ABOUTME: Plan kinds, plan requests and the remote-or-fallback plan result type
// ABOUTME: Structured workout and diet records used by the static fallback plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::UserProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which plan template and fallback content to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    /// Weekly training plan
    Workout,
    /// Daily meal plan
    Diet,
}

impl PlanKind {
    /// Lowercase name used in logs and payloads
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Workout => "workout",
            Self::Diet => "diet",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input to the plan generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Requested plan kind
    pub plan_kind: PlanKind,
    /// Profile to personalize the prompt with
    #[serde(default)]
    pub profile: UserProfile,
}

impl PlanRequest {
    /// Create a new plan request
    #[must_use]
    pub const fn new(plan_kind: PlanKind, profile: UserProfile) -> Self {
        Self { plan_kind, profile }
    }
}

/// Where a plan came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    /// Text produced by the remote model
    Remote,
    /// Static plan served because the remote call did not succeed
    Fallback,
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => f.write_str("remote"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// Outcome of plan generation
///
/// Serialized untagged: a remote plan is a JSON string, a fallback plan a JSON
/// object. Use [`PlanResult::source`] rather than inspecting the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanResult {
    /// Free text returned by the model
    Remote(String),
    /// Static structured plan
    Fallback(FallbackPlan),
}

impl PlanResult {
    /// Where this plan came from
    #[must_use]
    pub const fn source(&self) -> PlanSource {
        match self {
            Self::Remote(_) => PlanSource::Remote,
            Self::Fallback(_) => PlanSource::Fallback,
        }
    }

    /// Remote text, if this is a remote plan
    #[must_use]
    pub fn as_remote_text(&self) -> Option<&str> {
        match self {
            Self::Remote(text) => Some(text),
            Self::Fallback(_) => None,
        }
    }

    /// Structured fallback plan, if this is one
    #[must_use]
    pub const fn as_fallback(&self) -> Option<&FallbackPlan> {
        match self {
            Self::Remote(_) => None,
            Self::Fallback(plan) => Some(plan),
        }
    }
}

/// Static plan content, one shape per plan kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FallbackPlan {
    /// Fixed workout plan
    Workout(WorkoutPlan),
    /// Fixed diet plan
    Diet(DietPlan),
}

impl FallbackPlan {
    /// Plan kind this content belongs to
    #[must_use]
    pub const fn kind(&self) -> PlanKind {
        match self {
            Self::Workout(_) => PlanKind::Workout,
            Self::Diet(_) => PlanKind::Diet,
        }
    }
}

/// Structured workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Plan title
    pub plan_name: String,
    /// Program length
    pub duration: String,
    /// Sessions per week
    pub frequency: String,
    /// Exercises performed each session
    pub exercises: Vec<Exercise>,
}

/// One exercise in a workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Reps or hold time per set
    pub reps: String,
    /// Rest between sets
    pub rest: String,
    /// Form cue
    pub instructions: String,
}

/// Structured daily diet plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    /// Daily calorie target
    pub daily_calories: u32,
    /// Macro split in percent of calories
    pub macros: MacroSplit,
    /// Meal slots through the day
    pub meals: Vec<MealSlot>,
}

/// Macronutrient split, percentages of daily calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein percentage
    pub protein: u8,
    /// Carbohydrate percentage
    pub carbs: u8,
    /// Fat percentage
    pub fats: u8,
}

impl MacroSplit {
    /// Sum of all percentages
    #[must_use]
    pub fn total(&self) -> u16 {
        u16::from(self.protein) + u16::from(self.carbs) + u16::from(self.fats)
    }
}

/// One meal slot with interchangeable options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlot {
    /// Slot name (Breakfast, Lunch...)
    pub meal: String,
    /// Calorie budget for the slot
    pub calories: u32,
    /// Interchangeable food options
    pub options: Vec<String>,
}
