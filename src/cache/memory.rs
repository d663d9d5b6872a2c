// ABOUTME: In-memory key-value cache with LRU eviction
// ABOUTME: Bounded map shared across clones; contents live for the process only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use super::KeyValueCache;
use crate::errors::AppResult;
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory cache with LRU eviction
///
/// Clones share one store through `Arc<RwLock<LruCache>>`.
#[derive(Clone)]
pub struct InMemoryKeyValueCache {
    store: Arc<RwLock<LruCache<String, String>>>,
}

impl InMemoryKeyValueCache {
    /// Capacity used when zero entries are requested
    const FALLBACK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache holding at most `max_entries` records
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(Self::FALLBACK_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl KeyValueCache for InMemoryKeyValueCache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        // LruCache::get updates recency, so it needs the write lock
        let mut store = self.store.write().await;
        let value = store.get(key).cloned();
        drop(store);
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        // LruCache evicts the least recently used entry on push
        self.store.write().await.push(key.to_owned(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.store.write().await.pop(key);
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.store.write().await.clear();
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

impl fmt::Debug for InMemoryKeyValueCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryKeyValueCache").finish_non_exhaustive()
    }
}
