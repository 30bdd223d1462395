// ABOUTME: Integration tests for the in-memory session store
// ABOUTME: Covers insertion order, empty reads, workout completion and export snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use fitcoach_server::models::{
    EntryStatus, PlanEntry, PlanKind, PlanResult, ProgressEntry, ProgressKind, UserProfile,
    WorkoutCompletion,
};
use fitcoach_server::services::fallback_plan;
use fitcoach_server::store::{InMemorySessionStore, SessionStore};
use serde_json::json;
use std::sync::Arc;

fn store() -> Arc<dyn SessionStore> {
    Arc::new(InMemorySessionStore::new())
}

#[tokio::test]
async fn test_progress_keeps_insertion_order() {
    let store = store();
    for value in 1..=5 {
        store
            .append_progress("u1", ProgressEntry::measurement("weight", Some(json!(value)), None))
            .await
            .unwrap();
    }

    let progress = store.progress("u1").await.unwrap();
    assert_eq!(progress.len(), 5);
    let values: Vec<_> = progress.iter().map(|p| p.value.clone().unwrap()).collect();
    assert_eq!(values, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
}

#[tokio::test]
async fn test_unknown_user_reads_are_empty() {
    let store = store();
    assert!(store.workouts("nobody").await.unwrap().is_empty());
    assert!(store.meals("nobody").await.unwrap().is_empty());
    assert!(store.progress("nobody").await.unwrap().is_empty());
    assert!(store.profile("nobody").await.unwrap().is_none());

    let export = store.export("nobody").await.unwrap();
    assert!(export.profile.is_none());
    assert!(export.workouts.is_empty());
    assert!(export.meals.is_empty());
    assert!(export.progress.is_empty());
}

#[tokio::test]
async fn test_users_are_isolated() {
    let store = store();
    store
        .append_progress("alice", ProgressEntry::measurement("weight", Some(json!(60)), None))
        .await
        .unwrap();
    assert!(store.progress("bob").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicates_are_kept() {
    let store = store();
    let entry = PlanEntry::started_workout("general");
    store.append_workout("u1", entry.clone()).await.unwrap();
    store.append_workout("u1", entry).await.unwrap();
    assert_eq!(store.workouts("u1").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_complete_workout_updates_entry() {
    let store = store();
    let plan = PlanResult::Fallback(fallback_plan(PlanKind::Workout));
    let entry = PlanEntry::generated("workout", plan, UserProfile::default());
    let workout_id = entry.id.clone();
    store.append_workout("u1", entry).await.unwrap();

    let completion = WorkoutCompletion {
        duration: json!(35),
        exercises_completed: vec![json!("Plank"), json!("Push-ups")],
    };
    let updated = store
        .complete_workout("u1", &workout_id, &completion)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, EntryStatus::Completed);
    assert_eq!(updated.duration, Some(json!(35)));
    assert_eq!(store.workouts("u1").await.unwrap()[0], updated);
}

#[tokio::test]
async fn test_export_contains_everything() {
    let store = store();
    let profile: UserProfile = serde_json::from_value(json!({"age": 40})).unwrap();
    store.save_profile("u1", profile.clone()).await.unwrap();
    store
        .append_workout("u1", PlanEntry::started_workout("cardio"))
        .await
        .unwrap();
    store
        .append_progress("u1", ProgressEntry::meal_logged("lunch", vec![json!("rice")], json!(650)))
        .await
        .unwrap();

    let export = store.export("u1").await.unwrap();
    assert_eq!(export.profile.unwrap().profile, profile);
    assert_eq!(export.workouts.len(), 1);
    assert!(export.meals.is_empty());
    assert_eq!(export.progress[0].kind, ProgressKind::MealLogged);
}

#[tokio::test]
async fn test_concurrent_appends_are_all_kept() {
    let store = store();
    let mut handles = Vec::new();
    for i in 0..32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .append_progress("u1", ProgressEntry::measurement("steps", Some(json!(i)), None))
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    assert_eq!(store.progress("u1").await.unwrap().len(), 32);
}
