// ABOUTME: Cache-related constants for the local persistence fallback
// ABOUTME: Namespace, fixed record keys, in-memory capacity and file layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

/// Namespace prefix for every local cache key
pub const CACHE_KEY_PREFIX: &str = "fitzy:";

/// Record name for the last-known weekly series
pub const RECORD_WEEKLY_DATA: &str = "weeklyData";

/// Record name for the user's weekly goals
pub const RECORD_WEEKLY_GOALS: &str = "weeklyGoals";

/// Record name for the mirrored progress state
pub const RECORD_PROGRESS: &str = "progress";

/// Default maximum entries for the in-memory backend
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 256;

/// Directory name created under the platform data dir for the file backend
pub const DEFAULT_CACHE_DIR_NAME: &str = "fitzy";

/// File extension for file-backed cache records
pub const CACHE_FILE_EXTENSION: &str = "json";
