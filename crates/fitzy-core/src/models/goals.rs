// ABOUTME: User-editable daily goal targets per metric
// ABOUTME: Defaults from constants; edits reject negative or non-finite targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use super::{MetricKind, PerMetric};
use crate::constants::goals::{DEFAULT_CALORIES, DEFAULT_EXERCISE_MINUTES, DEFAULT_WATER_ML};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Daily target per metric; weekly targets are seven times these
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyGoals {
    /// Per-day target for each metric
    pub daily_target: PerMetric<f64>,
}

impl Default for WeeklyGoals {
    fn default() -> Self {
        Self {
            daily_target: PerMetric {
                water: DEFAULT_WATER_ML,
                duration: DEFAULT_EXERCISE_MINUTES,
                calories: DEFAULT_CALORIES,
            },
        }
    }
}

impl WeeklyGoals {
    /// Goals from explicit daily targets (not validated; zero goals compute as 0%)
    #[must_use]
    pub const fn new(daily_target: PerMetric<f64>) -> Self {
        Self { daily_target }
    }

    /// Daily target for `metric`
    #[must_use]
    pub fn daily(&self, metric: MetricKind) -> f64 {
        self.daily_target[metric]
    }

    /// Seven-day target for `metric`
    #[must_use]
    pub fn weekly(&self, metric: MetricKind) -> f64 {
        self.daily(metric) * 7.0
    }

    /// Copy with one target replaced
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `value` is negative or not finite. Zero is
    /// accepted and reads as 0% progress for that metric.
    pub fn with_target(mut self, metric: MetricKind, value: f64) -> AppResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "{metric} goal must be a non-negative number, got {value}"
            )));
        }
        self.daily_target[metric] = value;
        Ok(self)
    }
}
