// ABOUTME: Activity record store abstraction for user profiles, activity events and sessions
// ABOUTME: Remote document store contract with an in-process reference implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

/// In-memory record store
pub mod memory;

pub use memory::InMemoryRecordStore;

use crate::errors::AppResult;
use crate::models::{ActivityEvent, UserProfile, WorkoutSession};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// Remote store holding per-user documents
///
/// Every call may fail with a transient `ExternalServiceUnavailable` error;
/// callers degrade to the local cache instead of surfacing it.
#[async_trait]
pub trait ActivityRecordStore: Send + Sync {
    // ================================
    // Profiles
    // ================================

    /// Profile document for `user_id`, if one exists
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Create or replace the profile document
    async fn set_profile(&self, profile: &UserProfile) -> AppResult<()>;

    // ================================
    // Activity events
    // ================================

    /// Record an event; a later event for the same day and metric replaces
    /// the earlier one
    async fn append_event(&self, user_id: Uuid, event: ActivityEvent) -> AppResult<()>;

    /// Events dated in `start..=end`, ordered by date
    async fn query_events_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<ActivityEvent>>;

    // ================================
    // Workout sessions
    // ================================

    /// Sessions for `user_id`, newest first
    async fn list_workout_sessions(&self, user_id: Uuid) -> AppResult<Vec<WorkoutSession>>;

    /// Create or replace a session (matched by id)
    async fn save_workout_session(&self, session: &WorkoutSession) -> AppResult<()>;

    /// Verify the store is reachable
    async fn health_check(&self) -> AppResult<()>;
}
