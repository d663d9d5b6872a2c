// ABOUTME: In-memory activity record store backed by sharded concurrent maps
// ABOUTME: Offline switch simulates an unreachable remote for fallback testing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use super::ActivityRecordStore;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityEvent, MetricKind, UserProfile, WorkoutSession};
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// One event slot: last write wins per user, day and metric
type EventSlot = (Uuid, NaiveDate, MetricKind);

/// In-memory record store
///
/// Clones share state, so a test can hold one handle to flip the offline
/// switch while the tracker owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    profiles: Arc<DashMap<Uuid, UserProfile>>,
    events: Arc<DashMap<EventSlot, ActivityEvent>>,
    sessions: Arc<DashMap<Uuid, Vec<WorkoutSession>>>,
    offline: Arc<AtomicBool>,
}

impl InMemoryRecordStore {
    /// Empty, reachable store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail (`true`) or succeed again (`false`)
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Whether the offline switch is on
    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> AppResult<()> {
        if self.is_offline() {
            return Err(AppError::unavailable(service_names::RECORD_STORE));
        }
        Ok(())
    }
}

#[async_trait]
impl ActivityRecordStore for InMemoryRecordStore {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        self.ensure_online()?;
        Ok(self.profiles.get(&user_id).map(|p| p.value().clone()))
    }

    async fn set_profile(&self, profile: &UserProfile) -> AppResult<()> {
        self.ensure_online()?;
        self.profiles.insert(profile.uid, profile.clone());
        Ok(())
    }

    async fn append_event(&self, user_id: Uuid, event: ActivityEvent) -> AppResult<()> {
        self.ensure_online()?;
        let slot = (user_id, event.date(), event.metric());
        if let Some(previous) = self.events.insert(slot, event) {
            debug!(
                %user_id,
                date = %previous.date(),
                metric = %previous.metric(),
                "Replaced activity event for day"
            );
        }
        Ok(())
    }

    async fn query_events_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<ActivityEvent>> {
        self.ensure_online()?;
        let mut events: Vec<ActivityEvent> = self
            .events
            .iter()
            .filter(|entry| {
                let (owner, date, _) = *entry.key();
                owner == user_id && date >= start && date <= end
            })
            .map(|entry| *entry.value())
            .collect();
        events.sort_by_key(|e| (e.date(), e.metric()));
        Ok(events)
    }

    async fn list_workout_sessions(&self, user_id: Uuid) -> AppResult<Vec<WorkoutSession>> {
        self.ensure_online()?;
        let mut sessions = self
            .sessions
            .get(&user_id)
            .map(|s| s.value().clone())
            .unwrap_or_default();
        sessions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(sessions)
    }

    async fn save_workout_session(&self, session: &WorkoutSession) -> AppResult<()> {
        self.ensure_online()?;
        let mut sessions = self.sessions.entry(session.user_id).or_default();
        match sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => *existing = session.clone(),
            None => sessions.push(session.clone()),
        }
        drop(sessions);
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        self.ensure_online()
    }
}
