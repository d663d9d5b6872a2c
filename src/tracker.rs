// ABOUTME: Progress tracking session combining the record store, local fallback and calculators
// ABOUTME: Store failures degrade to cached or default state with an explicit source/sync notice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

//! # Progress Tracker
//!
//! [`ProgressTracker`] owns one user's progress for the duration of a
//! session. Every mutation runs the pure transforms from
//! `fitzy-intelligence`, mirrors the result into the local cache and then
//! pushes it to the record store. A store failure never surfaces as an
//! error: rejected events and sessions are queued, the tracker keeps working
//! on local state, and [`SyncStatus::LocalOnly`] is reported until
//! [`ProgressTracker::sync`] (or a later successful call) drains the queue.

use crate::cache::{CacheRecord, KeyValueCache, LocalFallback};
use crate::config::ProgressConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use crate::models::{
    ActivityEvent, MetricKind, ProgressState, StatsDelta, UserProfile, WeeklyGoals,
    WorkoutSession,
};
use crate::store::ActivityRecordStore;
use chrono::NaiveDate;
use fitzy_intelligence::progress::{
    accumulate_stats, delta_for_session, record_completion, record_saved, validate_delta,
    CompletionOutcome,
};
use fitzy_intelligence::{
    aggregate_in_window, compute_progress, streak_meter_percent, GoalProgress, WeekWindow,
    WeeklySeries,
};
use serde::{Deserialize, Serialize};
use std::mem;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Where the data a tracker shows came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Fetched from the record store
    Remote,
    /// Store unreachable; last-known local copy
    Cached,
    /// Store unreachable and nothing cached; defaults
    Defaults,
}

/// Whether every local change has reached the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Profile, events and sessions are all stored
    Synced,
    /// Some change is held locally until the store is reachable again
    LocalOnly,
}

/// Weekly chart data plus goal percentages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Seven-slot series per metric
    pub series: WeeklySeries,
    /// Percentages and motivation tier against the current goals
    pub progress: GoalProgress,
    /// Origin of `series`; `Cached` also covers a week rebuilt from queued events
    pub source: DataSource,
}

/// One user's progress session
pub struct ProgressTracker<S, C> {
    store: S,
    fallback: LocalFallback<C>,
    profile: UserProfile,
    goals: WeeklyGoals,
    source: DataSource,
    profile_dirty: bool,
    pending_events: Vec<ActivityEvent>,
    pending_sessions: Vec<WorkoutSession>,
}

impl<S: ActivityRecordStore, C: KeyValueCache> ProgressTracker<S, C> {
    /// Load the user's profile, creating it when the store has none
    ///
    /// Never fails: an unreachable store falls back to the cached progress
    /// snapshot, then to an empty profile.
    pub async fn open(store: S, cache: C, user_id: Uuid, config: &ProgressConfig) -> Self {
        let fallback = LocalFallback::new(cache);
        let goals = fallback
            .load_cached(CacheRecord::WeeklyGoals)
            .await
            .unwrap_or(config.default_goals);

        let (profile, source, profile_dirty) = match store.get_profile(user_id).await {
            Ok(Some(profile)) => {
                debug!(%user_id, "Loaded profile from record store");
                fallback
                    .save_cached(CacheRecord::ProgressSnapshot, &profile.progress)
                    .await;
                (profile, DataSource::Remote, false)
            }
            Ok(None) => {
                info!(%user_id, "Creating profile for new user");
                let profile = UserProfile::new(user_id, None, None);
                let dirty = match store.set_profile(&profile).await {
                    Ok(()) => false,
                    Err(e) => {
                        warn!(%user_id, error = %e, "Failed to store new profile");
                        true
                    }
                };
                (profile, DataSource::Remote, dirty)
            }
            Err(e) => {
                warn!(
                    %user_id,
                    service = service_names::RECORD_STORE,
                    error = %e,
                    "Record store unavailable, using local progress"
                );
                let mut profile = UserProfile::new(user_id, None, None);
                let source = match fallback
                    .load_cached::<ProgressState>(CacheRecord::ProgressSnapshot)
                    .await
                {
                    Some(progress) => {
                        profile.progress = progress;
                        DataSource::Cached
                    }
                    None => DataSource::Defaults,
                };
                (profile, source, true)
            }
        };

        Self {
            store,
            fallback,
            profile,
            goals,
            source,
            profile_dirty,
            pending_events: Vec::new(),
            pending_sessions: Vec::new(),
        }
    }

    /// User this session belongs to
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.profile.uid
    }

    /// Current profile
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Current progress state
    #[must_use]
    pub const fn progress(&self) -> &ProgressState {
        &self.profile.progress
    }

    /// Current weekly goals
    #[must_use]
    pub const fn goals(&self) -> &WeeklyGoals {
        &self.goals
    }

    /// Origin of the profile loaded by [`Self::open`]
    #[must_use]
    pub const fn data_source(&self) -> DataSource {
        self.source
    }

    /// `Synced` only when the profile and every queued event and session are stored
    #[must_use]
    pub fn sync_status(&self) -> SyncStatus {
        if self.profile_dirty || !self.pending_events.is_empty() || !self.pending_sessions.is_empty()
        {
            SyncStatus::LocalOnly
        } else {
            SyncStatus::Synced
        }
    }

    /// Events the store has not accepted yet, oldest first
    #[must_use]
    pub fn pending_events(&self) -> &[ActivityEvent] {
        &self.pending_events
    }

    /// Sessions the store has not accepted yet
    #[must_use]
    pub fn pending_sessions(&self) -> &[WorkoutSession] {
        &self.pending_sessions
    }

    /// Streak meter width in percent
    #[must_use]
    pub fn streak_meter(&self) -> u8 {
        streak_meter_percent(self.profile.progress.streak_days)
    }

    /// Record a completed exercise; only a first completion moves the streak
    pub async fn track_exercise_completion(
        &mut self,
        exercise_id: &str,
        date: NaiveDate,
    ) -> CompletionOutcome {
        let state = mem::take(&mut self.profile.progress);
        let (state, outcome) = record_completion(state, exercise_id, date);
        self.profile.progress = state;

        if outcome.changed() {
            info!(
                user_id = %self.user_id(),
                exercise_id,
                streak_days = self.profile.progress.streak_days,
                ?outcome,
                "Exercise completed"
            );
            self.persist().await;
        }
        outcome
    }

    /// Save a workout plan; returns whether it was new
    pub async fn save_workout(&mut self, workout_id: &str) -> bool {
        let state = mem::take(&mut self.profile.progress);
        let (state, inserted) = record_saved(state, workout_id);
        self.profile.progress = state;

        if inserted {
            self.persist().await;
        }
        inserted
    }

    /// Add increments to the lifetime stats
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative or non-finite increments
    pub async fn update_progress_stats(&mut self, delta: &StatsDelta) -> AppResult<()> {
        validate_delta(delta)?;
        if delta.is_empty() {
            return Ok(());
        }
        let state = mem::take(&mut self.profile.progress);
        self.profile.progress = accumulate_stats(state, delta);
        self.persist().await;
        Ok(())
    }

    /// Store a finished workout session and add it to the lifetime stats
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the session belongs to another user or
    /// carries invalid totals
    pub async fn record_session(&mut self, session: &WorkoutSession) -> AppResult<()> {
        if session.user_id != self.user_id() {
            return Err(AppError::invalid_input(format!(
                "session {} belongs to another user",
                session.id
            )));
        }
        let delta = delta_for_session(session);
        validate_delta(&delta)?;

        self.flush_pending_sessions().await;
        let stored = self.pending_sessions.is_empty()
            && match self.store.save_workout_session(session).await {
                Ok(()) => true,
                Err(e) => {
                    warn!(session_id = %session.id, error = %e, "Failed to store workout session");
                    false
                }
            };
        if !stored {
            self.pending_sessions.retain(|s| s.id != session.id);
            self.pending_sessions.push(session.clone());
        }
        let state = mem::take(&mut self.profile.progress);
        self.profile.progress = accumulate_stats(state, &delta);
        self.persist().await;
        Ok(())
    }

    /// Sessions for the calendar, newest first, including queued ones
    pub async fn workout_sessions(&mut self) -> Vec<WorkoutSession> {
        self.flush_pending_sessions().await;
        let mut sessions = match self.store.list_workout_sessions(self.user_id()).await {
            Ok(sessions) => sessions,
            Err(e) => {
                warn!(error = %e, "Failed to list workout sessions");
                Vec::new()
            }
        };
        for queued in &self.pending_sessions {
            sessions.retain(|s| s.id != queued.id);
            sessions.push(queued.clone());
        }
        sessions.sort_by(|a, b| b.date.cmp(&a.date));
        sessions
    }

    /// Log a daily tracker entry
    ///
    /// The entry is mirrored into the cached weekly series either way. When
    /// the store rejects it, it is queued for [`Self::sync`] and the cached
    /// series is started afresh if no cached week covers its day.
    pub async fn log_event(&mut self, event: ActivityEvent) -> SyncStatus {
        self.flush_pending_events().await;
        if self.pending_events.is_empty() {
            match self.store.append_event(self.user_id(), event).await {
                Ok(()) => {
                    self.mirror_event(&event, false).await;
                    return self.sync_status();
                }
                Err(e) => {
                    warn!(
                        date = %event.date(),
                        metric = %event.metric(),
                        error = %e,
                        "Failed to store activity event, keeping it locally"
                    );
                }
            }
        }
        self.pending_events.push(event);
        self.mirror_event(&event, true).await;
        self.sync_status()
    }

    /// Write `event` into the cached weekly series
    ///
    /// With `start_fresh`, an empty cache or an event past the cached week
    /// starts a new series around the event's day.
    async fn mirror_event(&self, event: &ActivityEvent, start_fresh: bool) {
        let cached = self
            .fallback
            .load_cached::<WeeklySeries>(CacheRecord::WeeklyData)
            .await;
        let mut series = match cached {
            Some(mut series) => {
                if series.record(event) {
                    self.fallback
                        .save_cached(CacheRecord::WeeklyData, &series)
                        .await;
                    return;
                }
                if !start_fresh || event.date() < series.start {
                    debug!(date = %event.date(), "Event outside cached week");
                    return;
                }
                WeeklySeries::empty(series.window, event.date())
            }
            None if start_fresh => WeeklySeries::empty(WeekWindow::default(), event.date()),
            None => return,
        };
        series.record(event);
        self.fallback
            .save_cached(CacheRecord::WeeklyData, &series)
            .await;
    }

    /// Change one daily goal and save the goals locally
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a negative or non-finite value
    pub async fn set_goal(&mut self, metric: MetricKind, value: f64) -> AppResult<()> {
        self.goals = self.goals.with_target(metric, value)?;
        if !self
            .fallback
            .save_cached(CacheRecord::WeeklyGoals, &self.goals)
            .await
        {
            warn!(%metric, "Goal updated for this session only");
        }
        Ok(())
    }

    /// Weekly chart data and goal progress for the window around `reference`
    pub async fn weekly_summary(
        &mut self,
        reference: NaiveDate,
        window: WeekWindow,
    ) -> WeeklySummary {
        self.flush_pending_events().await;
        let (start, end) = window.bounds(reference);
        let (mut series, mut source) = match self
            .store
            .query_events_in_range(self.user_id(), start, end)
            .await
        {
            Ok(events) => (
                aggregate_in_window(&events, window, reference),
                DataSource::Remote,
            ),
            Err(e) => {
                warn!(%start, %end, error = %e, "Failed to query activity events");
                match self
                    .fallback
                    .load_cached::<WeeklySeries>(CacheRecord::WeeklyData)
                    .await
                {
                    Some(cached) if cached.window == window && cached.start == start => {
                        (cached, DataSource::Cached)
                    }
                    _ => (WeeklySeries::empty(window, reference), DataSource::Defaults),
                }
            }
        };

        let mut folded = false;
        for event in &self.pending_events {
            folded |= series.record(event);
        }
        if folded && source == DataSource::Defaults {
            source = DataSource::Cached;
        }
        if source == DataSource::Remote || folded {
            self.fallback
                .save_cached(CacheRecord::WeeklyData, &series)
                .await;
        }

        let progress = compute_progress(&series.totals(), &self.goals);
        WeeklySummary {
            series,
            progress,
            source,
        }
    }

    /// Push queued events and sessions, then the current profile
    pub async fn sync(&mut self) -> SyncStatus {
        self.flush_pending_events().await;
        self.flush_pending_sessions().await;
        self.persist().await;
        self.sync_status()
    }

    /// Send queued events in order, stopping at the first rejection
    async fn flush_pending_events(&mut self) {
        if self.pending_events.is_empty() {
            return;
        }
        let user_id = self.user_id();
        let mut queued = mem::take(&mut self.pending_events);
        let mut sent = 0;
        for event in &queued {
            if let Err(e) = self.store.append_event(user_id, *event).await {
                debug!(error = %e, remaining = queued.len() - sent, "Activity events still queued");
                break;
            }
            sent += 1;
        }
        self.pending_events = queued.split_off(sent);
        if self.pending_events.is_empty() {
            info!(%user_id, sent, "Flushed queued activity events");
        }
    }

    async fn flush_pending_sessions(&mut self) {
        if self.pending_sessions.is_empty() {
            return;
        }
        let mut queued = mem::take(&mut self.pending_sessions);
        let mut sent = 0;
        for session in &queued {
            if let Err(e) = self.store.save_workout_session(session).await {
                debug!(error = %e, remaining = queued.len() - sent, "Workout sessions still queued");
                break;
            }
            sent += 1;
        }
        self.pending_sessions = queued.split_off(sent);
    }

    async fn persist(&mut self) {
        self.fallback
            .save_cached(CacheRecord::ProgressSnapshot, &self.profile.progress)
            .await;
        self.profile_dirty = match self.store.set_profile(&self.profile).await {
            Ok(()) => false,
            Err(e) => {
                warn!(
                    user_id = %self.user_id(),
                    service = service_names::RECORD_STORE,
                    error = %e,
                    "Profile kept locally"
                );
                true
            }
        };
    }
}
