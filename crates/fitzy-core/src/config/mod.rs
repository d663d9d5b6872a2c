// ABOUTME: Progress tracking configuration loaded from environment variables
// ABOUTME: Default daily goals with per-metric overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use crate::constants::goals::{DEFAULT_CALORIES, DEFAULT_EXERCISE_MINUTES, DEFAULT_WATER_ML};
use crate::models::{PerMetric, WeeklyGoals};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Environment variable overriding the default water goal (ml/day)
pub const ENV_GOAL_WATER: &str = "FITZY_GOAL_WATER_ML";
/// Environment variable overriding the default exercise goal (minutes/day)
pub const ENV_GOAL_EXERCISE: &str = "FITZY_GOAL_EXERCISE_MINUTES";
/// Environment variable overriding the default calorie goal (kcal/day)
pub const ENV_GOAL_CALORIES: &str = "FITZY_GOAL_CALORIES";

/// Progress tracking configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Goals used when no goals are cached for the user
    pub default_goals: WeeklyGoals,
}

impl ProgressConfig {
    /// Load progress configuration from environment
    ///
    /// Unparseable or negative overrides are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            default_goals: WeeklyGoals::new(PerMetric {
                water: goal_from_env(ENV_GOAL_WATER, DEFAULT_WATER_ML),
                duration: goal_from_env(ENV_GOAL_EXERCISE, DEFAULT_EXERCISE_MINUTES),
                calories: goal_from_env(ENV_GOAL_CALORIES, DEFAULT_CALORIES),
            }),
        }
    }
}

fn goal_from_env(var: &str, default: f64) -> f64 {
    let Ok(raw) = env::var(var) else {
        return default;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            warn!(variable = var, value = %raw, "Ignoring invalid goal override");
            default
        }
    }
}
