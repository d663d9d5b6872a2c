// ABOUTME: Weekly aggregator reducing dated activity events into seven day slots per metric
// ABOUTME: Explicit window policies: rolling seven days or Monday-start calendar week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

//! # Weekly Aggregation
//!
//! Two windowing policies exist and each call site names the one it uses:
//!
//! - [`WeekWindow::Rolling`]: the seven days ending at the reference day
//!   (slot 6 is always the reference day). Used for workout history charts.
//! - [`WeekWindow::CalendarWeek`]: Monday through Sunday of the week holding
//!   the reference day. Used by the daily tracker form.
//!
//! Events landing on the same slot are summed; the aggregator does not assume
//! the record store's last-write-wins rule.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use fitzy_core::constants::window::{DAYS_PER_WEEK, ROLLING_LOOKBACK_DAYS};
use fitzy_core::models::{ActivityEvent, MetricKind, PerMetric};
use serde::{Deserialize, Serialize};
use std::array;

/// Seven day slots
pub type WeekSlots = [f64; DAYS_PER_WEEK];

/// Which seven days a weekly series covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekWindow {
    /// Seven days ending at the reference day, inclusive
    #[default]
    Rolling,
    /// Monday through Sunday of the reference day's week
    CalendarWeek,
}

impl WeekWindow {
    /// First day of the window for `reference`
    #[must_use]
    pub fn start(self, reference: NaiveDate) -> NaiveDate {
        let back = match self {
            Self::Rolling => ROLLING_LOOKBACK_DAYS.unsigned_abs(),
            Self::CalendarWeek => u64::from(reference.weekday().num_days_from_monday()),
        };
        reference
            .checked_sub_days(Days::new(back))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Inclusive `(first, last)` days of the window for `reference`
    #[must_use]
    pub fn bounds(self, reference: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = self.start(reference);
        (start, day_after(start, DAYS_PER_WEEK - 1))
    }

    /// Slot index of `date` in the window for `reference`, if it falls inside
    #[must_use]
    pub fn slot_for(self, reference: NaiveDate, date: NaiveDate) -> Option<usize> {
        slot_from_start(self.start(reference), date)
    }
}

fn slot_from_start(start: NaiveDate, date: NaiveDate) -> Option<usize> {
    let offset = (date - start).num_days();
    usize::try_from(offset)
        .ok()
        .filter(|slot| *slot < DAYS_PER_WEEK)
}

fn day_after(start: NaiveDate, slots: usize) -> NaiveDate {
    start
        .checked_add_days(Days::new(slots as u64))
        .unwrap_or(NaiveDate::MAX)
}

const fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Per-metric seven-slot series, slot 0 = `start`, oldest to newest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySeries {
    /// Window policy that produced the series
    pub window: WeekWindow,
    /// Day of slot 0
    pub start: NaiveDate,
    /// Slots per metric
    pub slots: PerMetric<WeekSlots>,
}

impl WeeklySeries {
    /// All-zero series for the window around `reference`
    #[must_use]
    pub fn empty(window: WeekWindow, reference: NaiveDate) -> Self {
        Self {
            window,
            start: window.start(reference),
            slots: PerMetric::splat([0.0; DAYS_PER_WEEK]),
        }
    }

    /// Last day covered
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        day_after(self.start, DAYS_PER_WEEK - 1)
    }

    /// Slots for one metric
    #[must_use]
    pub fn series(&self, metric: MetricKind) -> &WeekSlots {
        &self.slots[metric]
    }

    /// Calendar day of `slot`, if the slot exists
    #[must_use]
    pub fn day(&self, slot: usize) -> Option<NaiveDate> {
        (slot < DAYS_PER_WEEK).then(|| day_after(self.start, slot))
    }

    /// Short weekday label per slot (`Mon`, `Tue`, ...)
    #[must_use]
    pub fn weekday_labels(&self) -> [&'static str; DAYS_PER_WEEK] {
        array::from_fn(|slot| weekday_label(day_after(self.start, slot).weekday()))
    }

    /// Sum of every slot per metric
    #[must_use]
    pub fn totals(&self) -> PerMetric<f64> {
        self.slots.map(|_, slots| slots.iter().sum())
    }

    /// Number of days with any non-zero metric
    #[must_use]
    pub fn active_days(&self) -> usize {
        (0..DAYS_PER_WEEK)
            .filter(|&slot| self.slots.iter().any(|(_, slots)| slots[slot] > 0.0))
            .count()
    }

    /// Replace one slot, as the daily tracker form does for the selected day
    pub fn set_slot(&mut self, metric: MetricKind, slot: usize, amount: f64) -> bool {
        match self.slots[metric].get_mut(slot) {
            Some(value) => {
                *value = amount;
                true
            }
            None => false,
        }
    }

    /// Write `event` into its slot, replacing what was there
    ///
    /// Mirrors the record store's last-write-wins rule for a locally kept
    /// series. Returns `false` when the event falls outside the window.
    pub fn record(&mut self, event: &ActivityEvent) -> bool {
        slot_from_start(self.start, event.date())
            .is_some_and(|slot| self.set_slot(event.metric(), slot, event.amount()))
    }

    fn add(&mut self, event: &ActivityEvent) {
        if let Some(slot) = slot_from_start(self.start, event.date()) {
            self.slots[event.metric()][slot] += event.amount();
        }
    }
}

/// Aggregate `events` into the rolling seven days ending at `reference`
///
/// Slot `6 - (reference - date)` receives each in-window event; events
/// outside the window are ignored and same-slot events are summed.
#[must_use]
pub fn aggregate_week(events: &[ActivityEvent], reference: NaiveDate) -> WeeklySeries {
    aggregate_in_window(events, WeekWindow::Rolling, reference)
}

/// Aggregate `events` into the seven days `window` selects around `reference`
#[must_use]
pub fn aggregate_in_window(
    events: &[ActivityEvent],
    window: WeekWindow,
    reference: NaiveDate,
) -> WeeklySeries {
    events
        .iter()
        .fold(WeeklySeries::empty(window, reference), |mut series, event| {
            series.add(event);
            series
        })
}
