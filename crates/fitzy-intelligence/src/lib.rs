// ABOUTME: Progress tracking engine: streaks, weekly aggregation and goal progress
// ABOUTME: Pure transforms over fitzy-core models, plus calendar and catalog lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

#![deny(unsafe_code)]

//! # Fitzy Intelligence
//!
//! Every function in this crate is a pure transform: inputs are small,
//! memory-resident collections and no call touches storage. Callers own
//! persistence of the returned values.

/// Consecutive-day streak calculator
pub mod streak;

/// Profile progress transforms (completions, saved workouts, lifetime stats)
pub mod progress;

/// Seven-slot weekly aggregation with named window policies
pub mod weekly;

/// Goal percentages and motivational tiers
pub mod goal_progress;

/// Month/day lookups over workout sessions
pub mod calendar;

/// Exercise and blog catalog lookups
pub mod catalog;

pub use goal_progress::{compute_progress, GoalProgress, MotivationTier};
pub use streak::{classify_streak_event, streak_meter_percent, update_streak, StreakOutcome};
pub use weekly::{aggregate_in_window, aggregate_week, WeekWindow, WeeklySeries};
