// ABOUTME: Pure profile progress transforms for completions, saved workouts and lifetime stats
// ABOUTME: Completion of a new exercise drives the streak; repeats leave state unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use crate::streak::{classify_streak_event, update_streak, StreakOutcome};
use chrono::NaiveDate;
use fitzy_core::errors::{AppError, AppResult};
use fitzy_core::models::{ProgressState, StatsDelta, WorkoutSession};

/// Result of recording an exercise completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Exercise was already in the completed set; nothing changed
    AlreadyCompleted,
    /// Exercise added; carries the streak classification for the day
    Recorded(StreakOutcome),
}

impl CompletionOutcome {
    /// Whether the state differs from the input
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Recorded(_))
    }
}

/// Record a completed exercise on `date`
///
/// Only a first completion of `exercise_id` feeds the streak calculator.
#[must_use]
pub fn record_completion(
    mut state: ProgressState,
    exercise_id: &str,
    date: NaiveDate,
) -> (ProgressState, CompletionOutcome) {
    if state.completed_ids.contains(exercise_id) {
        return (state, CompletionOutcome::AlreadyCompleted);
    }
    state.completed_ids.insert(exercise_id.to_owned());
    let outcome = classify_streak_event(state.last_activity_date, date);
    (
        update_streak(state, date),
        CompletionOutcome::Recorded(outcome),
    )
}

/// Add `workout_id` to the saved set; returns whether it was new
#[must_use]
pub fn record_saved(mut state: ProgressState, workout_id: &str) -> (ProgressState, bool) {
    let inserted = state.saved_ids.insert(workout_id.to_owned());
    (state, inserted)
}

/// Check a stats delta before it reaches `accumulate_stats`
///
/// # Errors
///
/// Returns `InvalidInput` for negative or non-finite increments
pub fn validate_delta(delta: &StatsDelta) -> AppResult<()> {
    for (field, value) in [("calories", delta.calories), ("minutes", delta.minutes)] {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{field} increment must be a non-negative number, got {v}"
                )));
            }
        }
    }
    Ok(())
}

/// Add each present field of `delta` to the lifetime stats
#[must_use]
pub fn accumulate_stats(mut state: ProgressState, delta: &StatsDelta) -> ProgressState {
    let stats = &mut state.stats;
    stats.total_calories += delta.calories.unwrap_or(0.0);
    stats.total_minutes += delta.minutes.unwrap_or(0.0);
    stats.total_completions = stats
        .total_completions
        .saturating_add(delta.completions.unwrap_or(0));
    state
}

/// Lifetime stats contributed by one workout session
#[must_use]
pub fn delta_for_session(session: &WorkoutSession) -> StatsDelta {
    StatsDelta::new(session.calories_burned, session.total_duration_minutes, 1)
}
