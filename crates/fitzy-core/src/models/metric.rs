// ABOUTME: Closed set of tracked metric kinds and a per-metric record type
// ABOUTME: Replaces loosely-typed metric keys so aggregation and goals stay exhaustive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Metric tracked by the daily tracker and the workout calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Water intake in millilitres
    Water,
    /// Exercise duration in minutes
    #[serde(rename = "exercise", alias = "duration")]
    Duration,
    /// Calories in kcal
    Calories,
}

impl MetricKind {
    /// Every metric kind in display order
    pub const ALL: [Self; 3] = [Self::Water, Self::Duration, Self::Calories];

    /// Stable key used in serialized documents and on the command line
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Duration => "exercise",
            Self::Calories => "calories",
        }
    }

    /// Chart label for the metric
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Water => "Water Intake (ml)",
            Self::Duration => "Exercise (minutes)",
            Self::Calories => "Calories",
        }
    }

    /// Unit suffix
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Water => "ml",
            Self::Duration => "min",
            Self::Calories => "kcal",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MetricKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "water" => Ok(Self::Water),
            "exercise" | "duration" | "minutes" => Ok(Self::Duration),
            "calories" | "kcal" => Ok(Self::Calories),
            other => Err(AppError::invalid_input(format!(
                "unknown metric '{other}' (expected water, exercise or calories)"
            ))),
        }
    }
}

/// Exactly one value per metric kind
///
/// Indexable by `MetricKind`, so code that walks metrics cannot forget one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerMetric<T> {
    /// Water value
    pub water: T,
    /// Exercise duration value
    #[serde(rename = "exercise", alias = "duration")]
    pub duration: T,
    /// Calories value
    pub calories: T,
}

impl<T> PerMetric<T> {
    /// Build by evaluating `f` once per metric kind
    pub fn from_fn(mut f: impl FnMut(MetricKind) -> T) -> Self {
        Self {
            water: f(MetricKind::Water),
            duration: f(MetricKind::Duration),
            calories: f(MetricKind::Calories),
        }
    }

    /// Borrow the value for `kind`
    #[must_use]
    pub const fn get(&self, kind: MetricKind) -> &T {
        match kind {
            MetricKind::Water => &self.water,
            MetricKind::Duration => &self.duration,
            MetricKind::Calories => &self.calories,
        }
    }

    /// Mutably borrow the value for `kind`
    pub fn get_mut(&mut self, kind: MetricKind) -> &mut T {
        match kind {
            MetricKind::Water => &mut self.water,
            MetricKind::Duration => &mut self.duration,
            MetricKind::Calories => &mut self.calories,
        }
    }

    /// Transform every value
    pub fn map<U>(&self, mut f: impl FnMut(MetricKind, &T) -> U) -> PerMetric<U> {
        PerMetric::from_fn(|kind| f(kind, self.get(kind)))
    }

    /// Iterate `(kind, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (MetricKind, &T)> {
        MetricKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

impl<T: Clone> PerMetric<T> {
    /// Same value for every metric
    #[must_use]
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Index<MetricKind> for PerMetric<T> {
    type Output = T;

    fn index(&self, kind: MetricKind) -> &T {
        self.get(kind)
    }
}

impl<T> IndexMut<MetricKind> for PerMetric<T> {
    fn index_mut(&mut self, kind: MetricKind) -> &mut T {
        self.get_mut(kind)
    }
}
