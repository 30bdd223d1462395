// ABOUTME: Fixed workout and diet plans returned when the remote model is unavailable
// ABOUTME: Content is identical for every user and never parameterized by the profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{DietPlan, Exercise, FallbackPlan, MacroSplit, MealSlot, PlanKind, WorkoutPlan};

const REST: &str = "60 seconds";
const SETS: u32 = 3;

/// Static plan for the given kind
#[must_use]
pub fn fallback_plan(kind: PlanKind) -> FallbackPlan {
    match kind {
        PlanKind::Workout => FallbackPlan::Workout(workout_plan()),
        PlanKind::Diet => FallbackPlan::Diet(diet_plan()),
    }
}

fn exercise(name: &str, reps: &str, instructions: &str) -> Exercise {
    Exercise {
        name: name.to_owned(),
        sets: SETS,
        reps: reps.to_owned(),
        rest: REST.to_owned(),
        instructions: instructions.to_owned(),
    }
}

/// Beginner full-body plan
#[must_use]
pub fn workout_plan() -> WorkoutPlan {
    WorkoutPlan {
        plan_name: "Beginner Full Body Workout".to_owned(),
        duration: "4 weeks".to_owned(),
        frequency: "3 days per week".to_owned(),
        exercises: vec![
            exercise(
                "Bodyweight Squats",
                "10-15",
                "Keep your chest up and weight on your heels",
            ),
            exercise("Push-ups", "5-12", "Modify on knees if needed"),
            exercise(
                "Plank",
                "30-60 seconds",
                "Keep your core tight and body straight",
            ),
            exercise(
                "Mountain Climbers",
                "30 seconds",
                "Keep hips level and core engaged",
            ),
        ],
    }
}

fn meal(name: &str, calories: u32, options: [&str; 2]) -> MealSlot {
    MealSlot {
        meal: name.to_owned(),
        calories,
        options: options.iter().map(|&option| option.to_owned()).collect(),
    }
}

/// Balanced 2000 kcal day
#[must_use]
pub fn diet_plan() -> DietPlan {
    DietPlan {
        daily_calories: 2000,
        macros: MacroSplit {
            protein: 25,
            carbs: 45,
            fats: 30,
        },
        meals: vec![
            meal(
                "Breakfast",
                400,
                [
                    "Oatmeal with berries and protein powder",
                    "Greek yogurt with nuts and honey",
                ],
            ),
            meal(
                "Lunch",
                500,
                [
                    "Grilled chicken salad with mixed greens",
                    "Quinoa bowl with vegetables and chickpeas",
                ],
            ),
            meal(
                "Dinner",
                600,
                [
                    "Salmon with sweet potato and broccoli",
                    "Lean beef stir-fry with brown rice",
                ],
            ),
            meal(
                "Snacks",
                300,
                ["Apple with almond butter", "Protein smoothie with banana"],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_fallback() {
        let FallbackPlan::Workout(plan) = fallback_plan(PlanKind::Workout) else {
            panic!("expected a workout plan");
        };
        assert_eq!(plan.exercises.len(), 4);
        assert_eq!(plan.exercises[0].name, "Bodyweight Squats");
        assert_eq!(plan.exercises[3].reps, "30 seconds");
        assert!(plan.exercises.iter().all(|e| e.sets == 3 && e.rest == "60 seconds"));
    }

    #[test]
    fn test_diet_fallback() {
        let FallbackPlan::Diet(plan) = fallback_plan(PlanKind::Diet) else {
            panic!("expected a diet plan");
        };
        assert_eq!(plan.daily_calories, 2000);
        assert_eq!(plan.macros.total(), 100);
        assert_eq!(plan.meals.len(), 4);
        let slot_total: u32 = plan.meals.iter().map(|m| m.calories).sum();
        assert_eq!(slot_total, plan.daily_calories);
        assert!(plan.meals.iter().all(|m| m.options.len() == 2));
    }

    #[test]
    fn test_fallback_kind_matches_request() {
        assert_eq!(fallback_plan(PlanKind::Workout).kind(), PlanKind::Workout);
        assert_eq!(fallback_plan(PlanKind::Diet).kind(), PlanKind::Diet);
    }
}
