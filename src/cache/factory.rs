// ABOUTME: Cache factory for configuration-based backend selection
// ABOUTME: Wraps the memory and file backends behind one KeyValueCache type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use super::{FileKeyValueCache, InMemoryKeyValueCache, KeyValueCache};
use crate::config::{CacheBackend, CacheConfig};
use crate::errors::AppResult;
use tracing::info;

#[derive(Debug, Clone)]
enum Backend {
    Memory(InMemoryKeyValueCache),
    File(FileKeyValueCache),
}

/// Unified cache interface over the configured backend
#[derive(Debug, Clone)]
pub struct Cache {
    inner: Backend,
}

impl Cache {
    /// Create a cache for `config`
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let inner = match config.backend {
            CacheBackend::Memory => {
                info!(max_entries = config.max_entries, "Initializing in-memory cache");
                Backend::Memory(InMemoryKeyValueCache::new(config.max_entries))
            }
            CacheBackend::File => {
                info!(directory = %config.directory.display(), "Initializing file cache");
                Backend::File(FileKeyValueCache::new(&config.directory))
            }
        };
        Self { inner }
    }

    /// Create a cache from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(&CacheConfig::from_env())
    }

    /// Backend in use
    #[must_use]
    pub const fn backend(&self) -> CacheBackend {
        match self.inner {
            Backend::Memory(_) => CacheBackend::Memory,
            Backend::File(_) => CacheBackend::File,
        }
    }
}

#[async_trait::async_trait]
impl KeyValueCache for Cache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match &self.inner {
            Backend::Memory(cache) => cache.get(key).await,
            Backend::File(cache) => cache.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        match &self.inner {
            Backend::Memory(cache) => cache.set(key, value).await,
            Backend::File(cache) => cache.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match &self.inner {
            Backend::Memory(cache) => cache.remove(key).await,
            Backend::File(cache) => cache.remove(key).await,
        }
    }

    async fn clear(&self) -> AppResult<()> {
        match &self.inner {
            Backend::Memory(cache) => cache.clear().await,
            Backend::File(cache) => cache.clear().await,
        }
    }

    async fn health_check(&self) -> AppResult<()> {
        match &self.inner {
            Backend::Memory(cache) => cache.health_check().await,
            Backend::File(cache) => cache.health_check().await,
        }
    }
}
