// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Goal defaults, motivation thresholds, window sizes and cache record names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file.

/// Cache-related constants (namespace, record keys, capacity)
pub mod cache;

/// Default daily goals per metric
pub mod goals {
    /// Default water intake target (ml per day)
    pub const DEFAULT_WATER_ML: f64 = 2000.0;
    /// Default exercise target (minutes per day)
    pub const DEFAULT_EXERCISE_MINUTES: f64 = 30.0;
    /// Default calorie target (kcal per day)
    pub const DEFAULT_CALORIES: f64 = 2000.0;
}

/// Weekly window sizes
pub mod window {
    /// Number of day slots in a weekly series
    pub const DAYS_PER_WEEK: usize = 7;
    /// Offset from the reference day to the first slot of a rolling week
    pub const ROLLING_LOOKBACK_DAYS: i64 = 6;
}

/// Goal progress thresholds (inclusive lower bounds on the average percent)
pub mod motivation {
    /// Average percent at or above which progress is "excellent"
    pub const EXCELLENT_MIN_PERCENT: f64 = 90.0;
    /// Average percent at or above which progress is "great"
    pub const GREAT_MIN_PERCENT: f64 = 70.0;
    /// Average percent at or above which progress is "on track"
    pub const ON_TRACK_MIN_PERCENT: f64 = 50.0;
    /// Average percent at or above which progress is a "good start"
    pub const GOOD_START_MIN_PERCENT: f64 = 30.0;
    /// Upper bound of any goal percentage
    pub const MAX_PERCENT: u8 = 100;
}

/// Streak display constants
pub mod streak {
    /// Streak meter width gained per streak day (percent)
    pub const METER_PERCENT_PER_DAY: u32 = 5;
}

/// Catalog lookup defaults
pub mod catalog {
    /// Default number of related exercises returned
    pub const DEFAULT_RELATED_LIMIT: usize = 3;
}

/// Service names used in logs and errors
pub mod service_names {
    /// Remote record store collaborator
    pub const RECORD_STORE: &str = "record store";
    /// Local key-value cache collaborator
    pub const LOCAL_CACHE: &str = "local cache";
    /// Binary / service name for structured logging
    pub const FITZY_PROGRESS: &str = "fitzy-progress";
}
