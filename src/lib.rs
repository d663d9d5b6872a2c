// ABOUTME: Main library entry point for Fitzy progress tracking
// ABOUTME: Record store and local cache adapters, tracker session, configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

#![deny(unsafe_code)]

//! # Fitzy Progress
//!
//! Progress tracking for the Fitzy fitness apps: consecutive-day streaks,
//! seven-day aggregation of logged water, exercise and calories, goal
//! percentages, and a local fallback used when the remote record store is
//! unreachable.
//!
//! ## Architecture
//!
//! - **fitzy-core**: errors, constants, models, goal configuration
//! - **fitzy-intelligence**: pure calculators (streak, weekly, goal progress,
//!   calendar, catalog)
//! - **store**: `ActivityRecordStore` trait plus an in-memory implementation
//! - **cache**: `KeyValueCache` backends and the typed `LocalFallback`
//! - **tracker**: `ProgressTracker`, the session tying them together
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use fitzy_progress::cache::InMemoryKeyValueCache;
//! use fitzy_progress::config::ProgressConfig;
//! use fitzy_progress::store::InMemoryRecordStore;
//! use fitzy_progress::tracker::ProgressTracker;
//! use fitzy_progress::WeekWindow;
//! use uuid::Uuid;
//!
//! # async fn example() {
//! let mut tracker = ProgressTracker::open(
//!     InMemoryRecordStore::new(),
//!     InMemoryKeyValueCache::new(16),
//!     Uuid::new_v4(),
//!     &ProgressConfig::default(),
//! )
//! .await;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap_or_default();
//! tracker.track_exercise_completion("desk-pushups", today).await;
//! let summary = tracker.weekly_summary(today, WeekWindow::Rolling).await;
//! println!("{}", summary.progress.tier.message());
//! # }
//! ```

/// Local key-value cache backends and the typed fallback
pub mod cache;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Remote record store abstraction
pub mod store;

/// Progress tracking session
pub mod tracker;

pub use fitzy_core::{constants, errors, models};
pub use fitzy_intelligence::{
    aggregate_in_window, aggregate_week, calendar, catalog, classify_streak_event,
    compute_progress, progress, streak_meter_percent, update_streak, GoalProgress,
    MotivationTier, StreakOutcome, WeekWindow, WeeklySeries,
};
