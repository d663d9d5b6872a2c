// ABOUTME: Consecutive-day streak calculator over completion events
// ABOUTME: Same-day repeats are idempotent, next-day extends, any gap resets to one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use chrono::NaiveDate;
use fitzy_core::constants::motivation::MAX_PERCENT;
use fitzy_core::constants::streak::METER_PERCENT_PER_DAY;
use fitzy_core::models::ProgressState;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a completion on a given day relates to the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakOutcome {
    /// Already counted today
    SameDay,
    /// Day after the last completion
    Extended,
    /// First completion ever
    Started,
    /// Two or more days since the last completion
    Reset,
    /// Earlier than the last completion
    BackDated,
}

impl StreakOutcome {
    /// Whether the streak fields change
    #[must_use]
    pub const fn changes_state(self) -> bool {
        matches!(self, Self::Extended | Self::Started | Self::Reset)
    }

    /// Lowercase name for display
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SameDay => "same day",
            Self::Extended => "extended",
            Self::Started => "started",
            Self::Reset => "reset",
            Self::BackDated => "back-dated",
        }
    }
}

/// Classify a completion on `event_date` against the last activity day
#[must_use]
pub fn classify_streak_event(
    last_activity_date: Option<NaiveDate>,
    event_date: NaiveDate,
) -> StreakOutcome {
    let Some(last) = last_activity_date else {
        return StreakOutcome::Started;
    };
    match (event_date - last).num_days() {
        0 => StreakOutcome::SameDay,
        1 => StreakOutcome::Extended,
        gap if gap < 0 => StreakOutcome::BackDated,
        _ => StreakOutcome::Reset,
    }
}

/// Apply a completion on `event_date` to the streak fields of `state`
///
/// A back-dated completion leaves the state untouched so the last activity
/// day never moves backwards.
#[must_use]
pub fn update_streak(mut state: ProgressState, event_date: NaiveDate) -> ProgressState {
    let outcome = classify_streak_event(state.last_activity_date, event_date);
    match outcome {
        StreakOutcome::SameDay => return state,
        StreakOutcome::BackDated => {
            debug!(
                %event_date,
                last = ?state.last_activity_date,
                "Ignoring back-dated completion for streak"
            );
            return state;
        }
        StreakOutcome::Extended => {
            state.streak_days = state.streak_days.saturating_add(1);
        }
        StreakOutcome::Started | StreakOutcome::Reset => {
            state.streak_days = 1;
        }
    }
    state.last_activity_date = Some(event_date);
    state
}

/// Width of the streak meter: five percent per day, capped at 100
#[must_use]
pub fn streak_meter_percent(streak_days: u32) -> u8 {
    let percent = streak_days
        .saturating_mul(METER_PERCENT_PER_DAY)
        .min(u32::from(MAX_PERCENT));
    u8::try_from(percent).unwrap_or(MAX_PERCENT)
}
