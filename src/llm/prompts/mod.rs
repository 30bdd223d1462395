// ABOUTME: Prompt templates for workout plans, diet plans and coach chat questions
// ABOUTME: Substitutes readable defaults for profile fields the user left out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Pure text builders. Profile values are embedded verbatim, so a numeric
//! `age` renders as `31` and a string `"31 years"` renders as written.

use crate::models::{PlanKind, UserProfile};
use serde_json::Value;

/// System message sent ahead of every plan prompt
pub const PLAN_SYSTEM_PROMPT: &str = "You are a professional fitness and nutrition expert.";

const NOT_SPECIFIED: &str = "Not specified";

fn field(value: Option<&Value>, default: &str) -> String {
    UserProfile::display_or(value, default)
}

/// Build the user prompt for the given plan kind
#[must_use]
pub fn build_plan_prompt(kind: PlanKind, profile: &UserProfile) -> String {
    match kind {
        PlanKind::Workout => workout_prompt(profile),
        PlanKind::Diet => diet_prompt(profile),
    }
}

/// Prompt asking for a weekly workout plan
#[must_use]
pub fn workout_prompt(profile: &UserProfile) -> String {
    format!(
        "\nYou are a certified personal trainer and fitness expert. \
         Create a personalized workout plan for:\n\
         \n\
         User Profile:\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Fitness Level: {level}\n\
         - Goals: {goals}\n\
         - Available Time: {time} per day\n\
         - Equipment: {equipment}\n\
         - Restrictions: {restrictions}\n\
         \n\
         Create a weekly workout plan with:\n\
         1. 3-4 workouts per week\n\
         2. Progressive difficulty\n\
         3. Safety considerations\n\
         4. Proper warm-up and cool-down\n\
         5. Exercise modifications for injuries\n\
         \n\
         Return as structured JSON with exercises, sets, reps, and form cues.\n",
        age = field(profile.age.as_ref(), NOT_SPECIFIED),
        gender = field(profile.gender.as_ref(), NOT_SPECIFIED),
        level = field(profile.fitness_level.as_ref(), "Beginner"),
        goals = field(profile.goals.as_ref(), "General fitness"),
        time = field(profile.workout_time.as_ref(), "30 minutes"),
        equipment = field(profile.equipment.as_ref(), "Bodyweight only"),
        restrictions = field(profile.restrictions.as_ref(), "None"),
    )
}

/// Prompt asking for a daily meal plan
#[must_use]
pub fn diet_prompt(profile: &UserProfile) -> String {
    format!(
        "\nYou are a certified nutritionist. Create a personalized meal plan for:\n\
         \n\
         User Profile:\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Weight: {weight}kg\n\
         - Height: {height}cm\n\
         - Goal: {goal}\n\
         - Dietary Preferences: {preference}\n\
         - Activity Level: {activity}\n\
         \n\
         Create a daily meal plan with:\n\
         1. Calculated calorie targets\n\
         2. Macro breakdown (protein, carbs, fats)\n\
         3. 3 main meals + 2 snacks\n\
         4. Shopping list\n\
         5. Prep instructions\n\
         \n\
         Return as structured JSON with meals, calories, and macros.\n",
        age = field(profile.age.as_ref(), NOT_SPECIFIED),
        gender = field(profile.gender.as_ref(), NOT_SPECIFIED),
        weight = field(profile.weight.as_ref(), NOT_SPECIFIED),
        height = field(profile.height.as_ref(), NOT_SPECIFIED),
        goal = field(profile.body_goal.as_ref(), "Maintenance"),
        preference = field(profile.diet_preference.as_ref(), "No restrictions"),
        activity = field(profile.fitness_level.as_ref(), "Moderate"),
    )
}

/// Prompt wrapping a free-text coaching question
#[must_use]
pub fn chat_prompt(question: &str) -> String {
    format!("\nYou are a fitness coach. Answer this question briefly and helpfully:\n{question}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_workout_defaults() {
        let prompt = workout_prompt(&UserProfile::default());
        for expected in [
            "Age: Not specified",
            "Gender: Not specified",
            "Fitness Level: Beginner",
            "Goals: General fitness",
            "Available Time: 30 minutes per day",
            "Equipment: Bodyweight only",
            "Restrictions: None",
        ] {
            assert!(prompt.contains(expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_diet_defaults() {
        let prompt = diet_prompt(&UserProfile::default());
        for expected in [
            "Age: Not specified",
            "Weight: Not specifiedkg",
            "Height: Not specifiedcm",
            "Goal: Maintenance",
            "Dietary Preferences: No restrictions",
            "Activity Level: Moderate",
        ] {
            assert!(prompt.contains(expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_values_are_embedded() {
        let profile: UserProfile = serde_json::from_value(json!({
            "age": 28,
            "weight": "70",
            "height": 175.5,
            "body_goal": "cut",
            "fitness_level": "Advanced"
        }))
        .unwrap();

        let diet = build_plan_prompt(PlanKind::Diet, &profile);
        assert!(diet.contains("Age: 28"));
        assert!(diet.contains("Weight: 70kg"));
        assert!(diet.contains("Height: 175.5cm"));
        assert!(diet.contains("Goal: cut"));
        assert!(diet.contains("Activity Level: Advanced"));

        let workout = build_plan_prompt(PlanKind::Workout, &profile);
        assert!(workout.contains("Fitness Level: Advanced"));
    }

    #[test]
    fn test_chat_prompt() {
        let prompt = chat_prompt("How many rest days?");
        assert!(prompt.contains("fitness coach"));
        assert!(prompt.ends_with("How many rest days?\n"));
    }
}
