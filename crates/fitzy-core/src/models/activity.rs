// ABOUTME: Dated, amount-bearing activity events for a single metric
// ABOUTME: Validating constructor rejects negative and non-finite amounts at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use super::MetricKind;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated user action for one metric (minutes exercised, calories logged, ...)
///
/// Amounts are validated once, here; downstream calculators do not re-check them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawActivityEvent")]
pub struct ActivityEvent {
    date: NaiveDate,
    metric: MetricKind,
    amount: f64,
}

/// Unvalidated wire form used by `Deserialize`
#[derive(Deserialize)]
struct RawActivityEvent {
    date: NaiveDate,
    metric: MetricKind,
    amount: f64,
}

impl TryFrom<RawActivityEvent> for ActivityEvent {
    type Error = AppError;

    fn try_from(raw: RawActivityEvent) -> AppResult<Self> {
        Self::new(raw.date, raw.metric, raw.amount)
    }
}

impl ActivityEvent {
    /// Create a validated event
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `amount` is negative, NaN or infinite
    pub fn new(date: NaiveDate, metric: MetricKind, amount: f64) -> AppResult<Self> {
        if !amount.is_finite() {
            return Err(AppError::invalid_input(format!(
                "{metric} amount must be a finite number"
            )));
        }
        if amount < 0.0 {
            return Err(AppError::invalid_input(format!(
                "{metric} amount must be non-negative, got {amount}"
            )));
        }
        Ok(Self {
            date,
            metric,
            amount,
        })
    }

    /// Calendar day of the event
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Metric the amount belongs to
    #[must_use]
    pub const fn metric(&self) -> MetricKind {
        self.metric
    }

    /// Non-negative amount
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Whether two events target the same day and metric slot
    #[must_use]
    pub fn same_slot(&self, other: &Self) -> bool {
        self.date == other.date && self.metric == other.metric
    }
}
