// ABOUTME: Exercise and blog post catalog records
// ABOUTME: Category and difficulty enums used by the catalog lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where an exercise fits into the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    /// Desk-friendly exercises
    Office,
    /// Household exercises
    Home,
    /// Cardio and strength mix
    Hybrid,
    /// High-intensity interval training
    Hiit,
}

impl ExerciseCategory {
    /// Display name of the category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Office => "Office Workouts",
            Self::Home => "Home Workouts",
            Self::Hybrid => "Hybrid Workouts",
            Self::Hiit => "HIIT Workouts",
        }
    }
}

/// Exercise difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Beginner
    Beginner,
    /// Intermediate
    Intermediate,
    /// Advanced
    Advanced,
}

/// Catalog exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise id
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Category
    pub category: ExerciseCategory,
    /// Difficulty
    pub difficulty: Difficulty,
    /// Typical duration in minutes
    #[serde(alias = "duration")]
    pub duration_minutes: f64,
    /// Estimated calories burned
    #[serde(alias = "caloriesBurn")]
    pub calories_burn: f64,
    /// Equipment required
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Muscles targeted
    #[serde(default)]
    pub target_muscles: Vec<String>,
    /// Needs floor space
    #[serde(default)]
    pub requires_space: bool,
}

/// Blog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogCategory {
    /// Training articles
    Fitness,
    /// Food articles
    Nutrition,
    /// Recovery and sleep articles
    Wellness,
    /// Motivation articles
    Motivation,
}

/// Blog post summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Post id
    pub id: String,
    /// Title
    pub title: String,
    /// Short excerpt
    pub excerpt: String,
    /// Category
    pub category: BlogCategory,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Publication day
    pub published_at: NaiveDate,
    /// Estimated reading time in minutes
    #[serde(alias = "readTime")]
    pub read_time_minutes: u32,
}
