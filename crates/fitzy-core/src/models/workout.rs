// ABOUTME: Logged workout session records shown on the calendar
// ABOUTME: Per-exercise sets/reps/duration plus session totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One exercise performed inside a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExercise {
    /// Catalog id of the exercise
    pub exercise_id: String,
    /// Sets performed
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
    /// Minutes spent
    #[serde(alias = "duration")]
    pub duration_minutes: f64,
}

/// A completed workout on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    /// Session id
    pub id: String,
    /// Owner
    pub user_id: Uuid,
    /// Day of the session
    pub date: NaiveDate,
    /// Exercises performed
    #[serde(default)]
    pub exercises: Vec<SessionExercise>,
    /// Total minutes
    #[serde(alias = "totalDuration")]
    pub total_duration_minutes: f64,
    /// Calories burned
    pub calories_burned: f64,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl WorkoutSession {
    /// Session with no exercise breakdown
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: Uuid,
        date: NaiveDate,
        total_duration_minutes: f64,
        calories_burned: f64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id,
            date,
            exercises: Vec::new(),
            total_duration_minutes,
            calories_burned,
            notes: String::new(),
        }
    }

    /// Attach an exercise breakdown
    #[must_use]
    pub fn with_exercises(mut self, exercises: Vec<SessionExercise>) -> Self {
        self.exercises = exercises;
        self
    }
}
