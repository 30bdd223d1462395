// ABOUTME: In-memory session store backed by a sharded concurrent map
// ABOUTME: Data lives for the process lifetime and is lost on restart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::SessionStore;
use crate::errors::AppResult;
use crate::models::{
    PlanEntry, ProgressEntry, SessionRecord, StoredProfile, UserDataExport, UserProfile,
    WorkoutCompletion,
};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Process-local session store
///
/// `DashMap` shards the key space, so writers for different users do not
/// contend. Records are created on first write.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    records: Arc<DashMap<String, SessionRecord>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_record<T>(&self, user_id: &str, f: impl FnOnce(&mut SessionRecord) -> T) -> T {
        let mut record = self
            .records
            .entry(user_id.to_owned())
            .or_insert_with(|| SessionRecord::new(user_id));
        f(record.value_mut())
    }

    fn read<T>(&self, user_id: &str, f: impl FnOnce(&SessionRecord) -> T) -> Option<T> {
        self.records.get(user_id).map(|record| f(record.value()))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save_profile(&self, user_id: &str, profile: UserProfile) -> AppResult<StoredProfile> {
        let stored = StoredProfile {
            profile,
            updated_at: Utc::now(),
        };
        self.with_record(user_id, |record| record.profile = Some(stored.clone()));
        debug!(user.id = %user_id, "Profile saved");
        Ok(stored)
    }

    async fn profile(&self, user_id: &str) -> AppResult<Option<StoredProfile>> {
        Ok(self
            .read(user_id, |record| record.profile.clone())
            .flatten())
    }

    async fn append_workout(&self, user_id: &str, entry: PlanEntry) -> AppResult<()> {
        self.with_record(user_id, |record| record.workouts.push(entry));
        Ok(())
    }

    async fn append_meal(&self, user_id: &str, entry: PlanEntry) -> AppResult<()> {
        self.with_record(user_id, |record| record.meals.push(entry));
        Ok(())
    }

    async fn append_progress(&self, user_id: &str, entry: ProgressEntry) -> AppResult<()> {
        self.with_record(user_id, |record| record.progress.push(entry));
        Ok(())
    }

    async fn complete_workout(
        &self,
        user_id: &str,
        workout_id: &str,
        completion: &WorkoutCompletion,
    ) -> AppResult<Option<PlanEntry>> {
        let Some(mut record) = self.records.get_mut(user_id) else {
            return Ok(None);
        };
        Ok(record
            .workouts
            .iter_mut()
            .find(|workout| workout.id == workout_id)
            .map(|workout| {
                workout.complete(completion);
                workout.clone()
            }))
    }

    async fn workouts(&self, user_id: &str) -> AppResult<Vec<PlanEntry>> {
        Ok(self
            .read(user_id, |record| record.workouts.clone())
            .unwrap_or_default())
    }

    async fn meals(&self, user_id: &str) -> AppResult<Vec<PlanEntry>> {
        Ok(self
            .read(user_id, |record| record.meals.clone())
            .unwrap_or_default())
    }

    async fn progress(&self, user_id: &str) -> AppResult<Vec<ProgressEntry>> {
        Ok(self
            .read(user_id, |record| record.progress.clone())
            .unwrap_or_default())
    }

    async fn export(&self, user_id: &str) -> AppResult<UserDataExport> {
        let record = self
            .read(user_id, SessionRecord::clone)
            .unwrap_or_else(|| SessionRecord::new(user_id));
        Ok(UserDataExport::from(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_reads_do_not_create_records() {
        let store = InMemorySessionStore::new();
        assert!(store.workouts("ghost").await.unwrap().is_empty());
        assert!(store.profile("ghost").await.unwrap().is_none());
        assert!(store.records.is_empty());
    }

    #[tokio::test]
    async fn test_complete_unknown_workout() {
        let store = InMemorySessionStore::new();
        store
            .append_workout("u1", PlanEntry::started_workout("general"))
            .await
            .unwrap();
        let completed = store
            .complete_workout("u1", "workout_missing", &WorkoutCompletion::default())
            .await
            .unwrap();
        assert!(completed.is_none());
        assert!(store
            .complete_workout("nobody", "workout_missing", &WorkoutCompletion::default())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_profile_is_replaced() {
        let store = InMemorySessionStore::new();
        let first: UserProfile = serde_json::from_value(json!({"age": 30})).unwrap();
        let second: UserProfile = serde_json::from_value(json!({"age": 31})).unwrap();
        store.save_profile("u1", first).await.unwrap();
        store.save_profile("u1", second.clone()).await.unwrap();
        assert_eq!(store.profile("u1").await.unwrap().unwrap().profile, second);
    }
}
