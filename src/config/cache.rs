// ABOUTME: Local cache configuration: backend selection, capacity and directory
// ABOUTME: Loaded from FITZY_CACHE_* environment variables with constant defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use crate::constants::cache::{DEFAULT_CACHE_DIR_NAME, DEFAULT_CACHE_MAX_ENTRIES};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

/// Environment variable selecting the cache backend (`memory` or `file`)
pub const ENV_CACHE_BACKEND: &str = "FITZY_CACHE_BACKEND";
/// Environment variable overriding the file cache directory
pub const ENV_CACHE_DIR: &str = "FITZY_CACHE_DIR";
/// Environment variable overriding the in-memory cache capacity
pub const ENV_CACHE_MAX_ENTRIES: &str = "FITZY_CACHE_MAX_ENTRIES";

/// Available local cache backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Process-local LRU map; contents vanish on exit
    Memory,
    /// One JSON file per record inside a directory
    #[default]
    File,
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::File => f.write_str("file"),
        }
    }
}

impl FromStr for CacheBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(Self::Memory),
            "file" | "disk" => Ok(Self::File),
            other => Err(AppError::config(format!(
                "unknown cache backend '{other}' (expected memory or file)"
            ))),
        }
    }
}

/// Local cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Backend to construct
    pub backend: CacheBackend,
    /// Maximum number of entries (in-memory backend)
    pub max_entries: usize,
    /// Directory holding record files (file backend)
    pub directory: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            directory: default_cache_dir(),
        }
    }
}

impl CacheConfig {
    /// In-memory configuration with default capacity
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: CacheBackend::Memory,
            ..Self::default()
        }
    }

    /// File configuration rooted at `directory`
    #[must_use]
    pub fn file(directory: impl Into<PathBuf>) -> Self {
        Self {
            backend: CacheBackend::File,
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Load cache configuration from environment
    ///
    /// Invalid values are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let backend = env::var(ENV_CACHE_BACKEND)
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(backend) => Some(backend),
                Err(e) => {
                    warn!(variable = ENV_CACHE_BACKEND, error = %e, "Ignoring invalid cache backend");
                    None
                }
            })
            .unwrap_or_default();

        let max_entries = env::var(ENV_CACHE_MAX_ENTRIES)
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES);

        let directory = env::var(ENV_CACHE_DIR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map_or_else(default_cache_dir, PathBuf::from);

        Self {
            backend,
            max_entries,
            directory,
        }
    }
}

/// Platform data directory for the file backend, falling back to the temp dir
#[must_use]
pub fn default_cache_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(env::temp_dir)
        .join(DEFAULT_CACHE_DIR_NAME)
}
