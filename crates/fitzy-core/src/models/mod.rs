// ABOUTME: Core data models for Fitzy progress tracking
// ABOUTME: Re-exports metric kinds, activity events, progress state, goals and catalog records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

//! # Data Models
//!
//! - `MetricKind` / `PerMetric`: the closed set of tracked metrics
//! - `ActivityEvent`: a validated, dated amount for one metric
//! - `ProgressState` / `UserProfile`: the per-user progress document
//! - `WeeklyGoals`: daily targets per metric
//! - `WorkoutSession`, `Exercise`, `BlogPost`: calendar and catalog records

mod activity;
mod catalog;
mod goals;
mod metric;
mod progress;
mod workout;

pub use activity::ActivityEvent;
pub use catalog::{BlogCategory, BlogPost, Difficulty, Exercise, ExerciseCategory};
pub use goals::WeeklyGoals;
pub use metric::{MetricKind, PerMetric};
pub use progress::{ProgressState, ProgressStats, StatsDelta, UserProfile, UserSettings};
pub use workout::{SessionExercise, WorkoutSession};
