// ABOUTME: Integration tests for the local key-value cache backends and typed fallback
// ABOUTME: Covers LRU eviction, file persistence, malformed records and failed writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use fitzy_progress::cache::{
    Cache, CacheRecord, FileKeyValueCache, InMemoryKeyValueCache, KeyValueCache, LocalFallback,
};
use fitzy_progress::config::{CacheBackend, CacheConfig};
use fitzy_progress::models::{MetricKind, ProgressState, WeeklyGoals};
use std::fs;
use tempfile::{tempdir, NamedTempFile};

/// Helper: goals differing from the defaults
fn custom_goals() -> WeeklyGoals {
    WeeklyGoals::default()
        .with_target(MetricKind::Water, 2500.0)
        .unwrap()
}

#[test]
fn test_record_keys_are_namespaced() {
    assert_eq!(CacheRecord::WeeklyData.key(), "fitzy:weeklyData");
    assert_eq!(CacheRecord::WeeklyGoals.key(), "fitzy:weeklyGoals");
    assert_eq!(CacheRecord::ProgressSnapshot.key(), "fitzy:progress");
}

#[tokio::test]
async fn test_memory_cache_set_get_remove() -> Result<()> {
    let cache = InMemoryKeyValueCache::new(8);
    assert_eq!(cache.get("missing").await?, None);

    cache.set("a", "1".to_owned()).await?;
    assert_eq!(cache.get("a").await?, Some("1".to_owned()));

    cache.remove("a").await?;
    cache.remove("a").await?;
    assert_eq!(cache.get("a").await?, None);
    assert!(cache.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_memory_cache_evicts_least_recently_used() -> Result<()> {
    let cache = InMemoryKeyValueCache::new(2);
    cache.set("a", "1".to_owned()).await?;
    cache.set("b", "2".to_owned()).await?;

    // Touch "a" so "b" becomes least recently used
    cache.get("a").await?;
    cache.set("c", "3".to_owned()).await?;

    assert_eq!(cache.len().await, 2);
    assert!(cache.get("a").await?.is_some());
    assert!(cache.get("b").await?.is_none());
    assert!(cache.get("c").await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_memory_clones_share_state() -> Result<()> {
    let cache = InMemoryKeyValueCache::new(4);
    let other = cache.clone();
    cache.set("k", "v".to_owned()).await?;
    assert_eq!(other.get("k").await?, Some("v".to_owned()));
    other.clear().await?;
    assert!(cache.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_file_cache_persists_across_instances() -> Result<()> {
    let dir = tempdir()?;
    let fallback = LocalFallback::new(FileKeyValueCache::new(dir.path()));
    assert!(
        fallback
            .save_cached(CacheRecord::WeeklyGoals, &custom_goals())
            .await
    );

    let reopened = LocalFallback::new(FileKeyValueCache::new(dir.path()));
    let goals: Option<WeeklyGoals> = reopened.load_cached(CacheRecord::WeeklyGoals).await;
    assert_eq!(goals, Some(custom_goals()));

    let file = reopened.inner().path_for(&CacheRecord::WeeklyGoals.key());
    assert_eq!(
        file.file_name().and_then(|n| n.to_str()),
        Some("fitzy_weeklyGoals.json")
    );
    assert!(file.exists());
    Ok(())
}

#[tokio::test]
async fn test_file_cache_clear_removes_records() -> Result<()> {
    let dir = tempdir()?;
    let cache = FileKeyValueCache::new(dir.path().join("nested"));

    // Clearing a directory that does not exist yet is fine
    cache.clear().await?;

    cache.set("fitzy:a", "{}".to_owned()).await?;
    cache.set("fitzy:b", "{}".to_owned()).await?;
    cache.clear().await?;
    assert_eq!(cache.get("fitzy:a").await?, None);
    assert_eq!(cache.get("fitzy:b").await?, None);
    cache.health_check().await?;
    Ok(())
}

#[tokio::test]
async fn test_malformed_record_falls_back_to_default() -> Result<()> {
    let cache = InMemoryKeyValueCache::new(8);
    cache
        .set(&CacheRecord::ProgressSnapshot.key(), "{not json".to_owned())
        .await?;
    cache
        .set(&CacheRecord::WeeklyGoals.key(), r#"{"water":"lots"}"#.to_owned())
        .await?;

    let fallback = LocalFallback::new(cache);
    let progress: Option<ProgressState> =
        fallback.load_cached(CacheRecord::ProgressSnapshot).await;
    assert!(progress.is_none());

    let defaulted: ProgressState = fallback
        .load_or_default(CacheRecord::ProgressSnapshot)
        .await;
    assert_eq!(defaulted, ProgressState::default());

    let goals: Option<WeeklyGoals> = fallback.load_cached(CacheRecord::WeeklyGoals).await;
    assert!(goals.is_none());
    Ok(())
}

#[tokio::test]
async fn test_legacy_progress_keys_are_accepted() -> Result<()> {
    let cache = InMemoryKeyValueCache::new(8);
    cache
        .set(
            &CacheRecord::ProgressSnapshot.key(),
            r#"{"completedExercises":["a","b"],"streakDays":3,"lastWorkoutDate":"2025-03-04","stats":{"caloriesBurned":120.0}}"#
                .to_owned(),
        )
        .await?;

    let fallback = LocalFallback::new(cache);
    let progress: ProgressState = fallback
        .load_or_default(CacheRecord::ProgressSnapshot)
        .await;
    assert_eq!(progress.completed_ids.len(), 2);
    assert_eq!(progress.streak_days, 3);
    assert!((progress.stats.total_calories - 120.0).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_write_failure_returns_false() -> Result<()> {
    // A regular file where the cache directory should be makes every write fail
    let blocker = NamedTempFile::new()?;
    let fallback = LocalFallback::new(FileKeyValueCache::new(blocker.path()));

    assert!(
        !fallback
            .save_cached(CacheRecord::WeeklyGoals, &custom_goals())
            .await
    );
    let goals: WeeklyGoals = fallback.load_or_default(CacheRecord::WeeklyGoals).await;
    assert_eq!(goals, WeeklyGoals::default());
    Ok(())
}

#[tokio::test]
async fn test_forget_removes_record() -> Result<()> {
    let fallback = LocalFallback::new(InMemoryKeyValueCache::new(8));
    assert!(
        fallback
            .save_cached(CacheRecord::WeeklyGoals, &custom_goals())
            .await
    );
    assert!(fallback.forget(CacheRecord::WeeklyGoals).await);
    let goals: Option<WeeklyGoals> = fallback.load_cached(CacheRecord::WeeklyGoals).await;
    assert!(goals.is_none());
    Ok(())
}

#[tokio::test]
async fn test_factory_selects_backend() -> Result<()> {
    let memory = Cache::new(&CacheConfig::in_memory());
    assert_eq!(memory.backend(), CacheBackend::Memory);
    memory.set("k", "v".to_owned()).await?;
    assert_eq!(memory.get("k").await?, Some("v".to_owned()));

    let dir = tempdir()?;
    let file = Cache::new(&CacheConfig::file(dir.path()));
    assert_eq!(file.backend(), CacheBackend::File);
    file.set("fitzy:k", "v".to_owned()).await?;
    let on_disk = fs::read_to_string(dir.path().join("fitzy_k.json"))?;
    assert_eq!(on_disk, "v");
    Ok(())
}
