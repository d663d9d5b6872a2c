// ABOUTME: Local persistence fallback over a pluggable key-value cache
// ABOUTME: Fixed record names; malformed or failed entries degrade to defaults, never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

/// Cache factory selecting a backend from configuration
pub mod factory;
/// File-backed cache implementation
pub mod file;
/// In-memory cache implementation
pub mod memory;

pub use factory::Cache;
pub use file::FileKeyValueCache;
pub use memory::InMemoryKeyValueCache;

use crate::constants::cache::{
    CACHE_KEY_PREFIX, RECORD_PROGRESS, RECORD_WEEKLY_DATA, RECORD_WEEKLY_GOALS,
};
use crate::constants::service_names;
use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Raw string key-value store used as the local fallback
///
/// # Examples
///
/// ```rust,no_run
/// use fitzy_progress::cache::{InMemoryKeyValueCache, KeyValueCache};
/// # async fn example() -> Result<(), fitzy_progress::errors::AppError> {
/// let cache = InMemoryKeyValueCache::new(16);
/// cache.set("fitzy:weeklyGoals", r#"{"water":2500.0}"#.to_owned()).await?;
/// let raw: Option<String> = cache.get("fitzy:weeklyGoals").await?;
/// assert!(raw.is_some());
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueCache: Send + Sync {
    /// Read the raw value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Remove `key`; removing a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Remove every entry
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn clear(&self) -> AppResult<()>;

    /// Verify the backend is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable
    async fn health_check(&self) -> AppResult<()>;
}

/// Records mirrored into the local cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheRecord {
    /// Last-known weekly series
    WeeklyData,
    /// User's weekly goals
    WeeklyGoals,
    /// Last-known progress state
    ProgressSnapshot,
}

impl CacheRecord {
    /// Every record kind
    pub const ALL: [Self; 3] = [Self::WeeklyData, Self::WeeklyGoals, Self::ProgressSnapshot];

    /// Record name without namespace
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WeeklyData => RECORD_WEEKLY_DATA,
            Self::WeeklyGoals => RECORD_WEEKLY_GOALS,
            Self::ProgressSnapshot => RECORD_PROGRESS,
        }
    }

    /// Namespaced cache key
    #[must_use]
    pub fn key(self) -> String {
        format!("{CACHE_KEY_PREFIX}{}", self.name())
    }
}

impl fmt::Display for CacheRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed, failure-tolerant view over a [`KeyValueCache`]
///
/// Reads yield `None` for absent, unreadable or malformed records; writes
/// report success as a `bool`. Neither direction surfaces an error.
#[derive(Debug, Clone)]
pub struct LocalFallback<C> {
    cache: C,
}

impl<C: KeyValueCache> LocalFallback<C> {
    /// Wrap a raw cache
    pub const fn new(cache: C) -> Self {
        Self { cache }
    }

    /// Underlying raw cache
    pub const fn inner(&self) -> &C {
        &self.cache
    }

    /// Last saved value of `record`, if present and well-formed
    pub async fn load_cached<T: DeserializeOwned>(&self, record: CacheRecord) -> Option<T> {
        let key = record.key();
        let raw = match self.cache.get(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(%record, "No cached record");
                return None;
            }
            Err(e) => {
                warn!(
                    service = service_names::LOCAL_CACHE,
                    %record,
                    error = %e,
                    "Failed to read cached record"
                );
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%record, error = %e, "Ignoring malformed cached record");
                None
            }
        }
    }

    /// Cached value of `record`, or `T::default()`
    pub async fn load_or_default<T: DeserializeOwned + Default>(&self, record: CacheRecord) -> T {
        self.load_cached(record).await.unwrap_or_default()
    }

    /// Save `value` as `record`; returns whether the write succeeded
    pub async fn save_cached<T: Serialize + Sync>(&self, record: CacheRecord, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(%record, error = %e, "Failed to serialize record for cache");
                return false;
            }
        };

        match self.cache.set(&record.key(), raw).await {
            Ok(()) => {
                debug!(%record, "Saved record to local cache");
                true
            }
            Err(e) => {
                warn!(
                    service = service_names::LOCAL_CACHE,
                    %record,
                    error = %e,
                    "Failed to write cached record"
                );
                false
            }
        }
    }

    /// Drop `record`; returns whether the removal succeeded
    pub async fn forget(&self, record: CacheRecord) -> bool {
        match self.cache.remove(&record.key()).await {
            Ok(()) => true,
            Err(e) => {
                warn!(%record, error = %e, "Failed to remove cached record");
                false
            }
        }
    }
}
