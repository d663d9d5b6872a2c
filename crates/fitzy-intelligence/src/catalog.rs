// ABOUTME: Exercise and blog catalog lookups over small in-memory lists
// ABOUTME: Category/difficulty filters, related exercises and case-insensitive post search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use fitzy_core::constants::catalog::DEFAULT_RELATED_LIMIT;
use fitzy_core::models::{BlogCategory, BlogPost, Difficulty, Exercise, ExerciseCategory};

/// Exercises matching the optional filters, sorted by name
#[must_use]
pub fn filter_exercises<'a>(
    catalog: &'a [Exercise],
    category: Option<ExerciseCategory>,
    difficulty: Option<Difficulty>,
) -> Vec<&'a Exercise> {
    let mut matches: Vec<&Exercise> = catalog
        .iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .filter(|e| difficulty.is_none_or(|d| e.difficulty == d))
        .collect();
    matches.sort_by(|a, b| a.name.cmp(&b.name));
    matches
}

/// Up to `limit` other exercises from the same category, ordered by id
#[must_use]
pub fn related_exercises<'a>(
    catalog: &'a [Exercise],
    exercise: &Exercise,
    limit: usize,
) -> Vec<&'a Exercise> {
    let mut related: Vec<&Exercise> = catalog
        .iter()
        .filter(|e| e.category == exercise.category && e.id != exercise.id)
        .collect();
    related.sort_by(|a, b| a.id.cmp(&b.id));
    related.truncate(limit);
    related
}

/// Related exercises capped at the detail page's default count
#[must_use]
pub fn related_exercises_default<'a>(catalog: &'a [Exercise], exercise: &Exercise) -> Vec<&'a Exercise> {
    related_exercises(catalog, exercise, DEFAULT_RELATED_LIMIT)
}

/// Exercise by id
#[must_use]
pub fn find_exercise<'a>(catalog: &'a [Exercise], id: &str) -> Option<&'a Exercise> {
    catalog.iter().find(|e| e.id == id)
}

/// Posts whose title or excerpt contains `query` (case-insensitive)
///
/// An empty query matches every post; `None` category means all categories.
#[must_use]
pub fn search_posts<'a>(
    posts: &'a [BlogPost],
    query: &str,
    category: Option<BlogCategory>,
) -> Vec<&'a BlogPost> {
    let needle = query.trim().to_lowercase();
    posts
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.excerpt.to_lowercase().contains(&needle)
        })
        .collect()
}
