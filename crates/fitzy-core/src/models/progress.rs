// ABOUTME: User progress state and profile document models
// ABOUTME: Completed/saved ids, streak counters, lifetime stats and profile settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Cumulative lifetime statistics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressStats {
    /// Calories burned across all workouts
    #[serde(alias = "caloriesBurned")]
    pub total_calories: f64,
    /// Minutes exercised across all workouts
    #[serde(alias = "minutesExercised")]
    pub total_minutes: f64,
    /// Number of completed workouts
    #[serde(alias = "workoutsCompleted")]
    pub total_completions: u64,
}

/// Partial increment to `ProgressStats`; absent fields add nothing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDelta {
    /// Calories to add
    pub calories: Option<f64>,
    /// Minutes to add
    pub minutes: Option<f64>,
    /// Completions to add
    pub completions: Option<u64>,
}

impl StatsDelta {
    /// Delta with every field set
    #[must_use]
    pub const fn new(calories: f64, minutes: f64, completions: u64) -> Self {
        Self {
            calories: Some(calories),
            minutes: Some(minutes),
            completions: Some(completions),
        }
    }

    /// Whether applying this delta would change nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calories.unwrap_or(0.0).abs() < f64::EPSILON
            && self.minutes.unwrap_or(0.0).abs() < f64::EPSILON
            && self.completions.unwrap_or(0) == 0
    }
}

/// Per-user progress record
///
/// Owned by the user's profile; changed only through the streak calculator
/// and the accumulation transforms in `fitzy-intelligence`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressState {
    /// Exercise ids the user has completed
    #[serde(alias = "completedExercises")]
    pub completed_ids: BTreeSet<String>,
    /// Workout ids the user has saved
    #[serde(alias = "savedWorkouts")]
    pub saved_ids: BTreeSet<String>,
    /// Consecutive calendar days with a completion
    pub streak_days: u32,
    /// Day of the completion that last moved the streak
    #[serde(alias = "lastWorkoutDate")]
    pub last_activity_date: Option<NaiveDate>,
    /// Lifetime statistics
    pub stats: ProgressStats,
}

/// Notification preferences stored on the profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Whether reminders are enabled
    pub notifications_enabled: bool,
    /// Reminder time of day (`HH:MM`), if set
    pub reminder_time: Option<String>,
}

/// Profile document kept in the record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User id
    pub uid: Uuid,
    /// Display name
    pub display_name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Progress record
    pub progress: ProgressState,
    /// Settings
    pub settings: UserSettings,
}

impl UserProfile {
    /// Fresh profile with empty progress and notifications off
    #[must_use]
    pub fn new(uid: Uuid, display_name: Option<String>, email: Option<String>) -> Self {
        Self {
            uid,
            display_name,
            email,
            created_at: Utc::now(),
            progress: ProgressState::default(),
            settings: UserSettings::default(),
        }
    }
}
