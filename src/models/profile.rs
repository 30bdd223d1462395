// ABOUTME: User fitness profile as submitted by clients
// ABOUTME: Known fields are typed as optional JSON scalars, unknown keys are preserved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Free-form fitness profile
///
/// Every field is optional and unvalidated. Values may arrive as strings or
/// numbers (`"70"` and `70` are both accepted for weight). Defaults are not
/// stored here; the prompt builder substitutes them at read time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
    /// Gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Value>,
    /// Self-reported fitness or activity level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_level: Option<Value>,
    /// Training goals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Value>,
    /// Time available per day for training
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_time: Option<Value>,
    /// Available equipment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Value>,
    /// Injuries or other restrictions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Value>,
    /// Body weight in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Value>,
    /// Height in cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Value>,
    /// Body composition goal (cut, bulk, maintenance)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_goal: Option<Value>,
    /// Dietary preference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_preference: Option<Value>,
    /// Any other keys the client sent
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl UserProfile {
    /// Render a profile value for prompt text, or `default` when missing
    ///
    /// Strings are used verbatim, other scalars use their JSON rendering and
    /// `null` counts as missing.
    #[must_use]
    pub fn display_or(value: Option<&Value>, default: &str) -> String {
        match value {
            None | Some(Value::Null) => default.to_owned(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_strings_numbers_and_unknown_keys() {
        let profile: UserProfile = serde_json::from_value(json!({
            "age": 31,
            "gender": "female",
            "weight": "64.5",
            "favorite_sport": "climbing"
        }))
        .unwrap();

        assert_eq!(UserProfile::display_or(profile.age.as_ref(), "x"), "31");
        assert_eq!(UserProfile::display_or(profile.gender.as_ref(), "x"), "female");
        assert_eq!(UserProfile::display_or(profile.weight.as_ref(), "x"), "64.5");
        assert_eq!(profile.extra["favorite_sport"], "climbing");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let profile: UserProfile = serde_json::from_value(json!({"goals": null})).unwrap();
        assert_eq!(
            UserProfile::display_or(profile.goals.as_ref(), "General fitness"),
            "General fitness"
        );
    }

    #[test]
    fn test_round_trip_keeps_extra_keys() {
        let input = json!({"equipment": "kettlebell", "sleep_hours": 7});
        let profile: UserProfile = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(serde_json::to_value(&profile).unwrap(), input);
    }
}
