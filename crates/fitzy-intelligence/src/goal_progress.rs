// ABOUTME: Goal progress calculator comparing weekly totals against seven-day goal targets
// ABOUTME: Percentages are rounded and clamped to 0..=100, averaged into a motivation tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use fitzy_core::constants::motivation::{
    EXCELLENT_MIN_PERCENT, GOOD_START_MIN_PERCENT, GREAT_MIN_PERCENT, MAX_PERCENT,
    ON_TRACK_MIN_PERCENT,
};
use fitzy_core::models::{MetricKind, PerMetric, WeeklyGoals};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Motivation bucket derived from the average goal percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotivationTier {
    /// Average of at least 90%
    Excellent,
    /// Average of at least 70%
    Great,
    /// Average of at least 50%
    OnTrack,
    /// Average of at least 30%
    GoodStart,
    /// Anything below 30%
    EveryStepCounts,
}

impl MotivationTier {
    /// Tier for an average percentage; each threshold belongs to the higher tier
    #[must_use]
    pub fn from_average(average: f64) -> Self {
        if average >= EXCELLENT_MIN_PERCENT {
            Self::Excellent
        } else if average >= GREAT_MIN_PERCENT {
            Self::Great
        } else if average >= ON_TRACK_MIN_PERCENT {
            Self::OnTrack
        } else if average >= GOOD_START_MIN_PERCENT {
            Self::GoodStart
        } else {
            Self::EveryStepCounts
        }
    }

    /// Short lowercase label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Great => "great",
            Self::OnTrack => "on track",
            Self::GoodStart => "good start",
            Self::EveryStepCounts => "every step counts",
        }
    }

    /// Message shown under the weekly progress bars
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work! You're crushing your goals!",
            Self::Great => "Great job! You're making fantastic progress!",
            Self::OnTrack => "You're on the right track! Keep pushing!",
            Self::GoodStart => "Good start! Keep going to reach your goals!",
            Self::EveryStepCounts => "Every step counts. Let's make progress this week!",
        }
    }
}

impl fmt::Display for MotivationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weekly progress against goals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Whole percent per metric, 0..=100
    pub percent: PerMetric<u8>,
    /// Unweighted mean of the three percentages
    pub average: f64,
    /// Tier for `average`
    pub tier: MotivationTier,
}

impl GoalProgress {
    /// Percent for one metric
    #[must_use]
    pub fn percent_for(&self, metric: MetricKind) -> u8 {
        self.percent[metric]
    }
}

/// Percentage of a seven-day goal reached by `total`
///
/// Unusable goals (zero, negative, non-finite) and non-finite totals give 0.
#[must_use]
pub fn metric_percent(total: f64, daily_goal: f64) -> u8 {
    if !total.is_finite() || !daily_goal.is_finite() || daily_goal <= 0.0 {
        return 0;
    }
    let weekly_goal = daily_goal * 7.0;
    let percent = (total / weekly_goal * 100.0).round();
    percent.clamp(0.0, f64::from(MAX_PERCENT)) as u8
}

/// Compare weekly totals against goals
#[must_use]
pub fn compute_progress(weekly_totals: &PerMetric<f64>, goals: &WeeklyGoals) -> GoalProgress {
    let percent = weekly_totals.map(|metric, total| metric_percent(*total, goals.daily(metric)));
    let sum: f64 = percent.iter().map(|(_, p)| f64::from(*p)).sum();
    let average = sum / MetricKind::ALL.len() as f64;
    let tier = MotivationTier::from_average(average);
    debug!(
        water = percent.water,
        exercise = percent.duration,
        calories = percent.calories,
        average,
        tier = %tier,
        "Computed goal progress"
    );
    GoalProgress {
        percent,
        average,
        tier,
    }
}
