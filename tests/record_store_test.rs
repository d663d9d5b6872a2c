// ABOUTME: Integration tests for the in-memory activity record store
// ABOUTME: Covers last-write-wins events, range queries, sessions and the offline switch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use chrono::NaiveDate;
use fitzy_progress::errors::ErrorCode;
use fitzy_progress::models::{ActivityEvent, MetricKind, UserProfile, WorkoutSession};
use fitzy_progress::store::{ActivityRecordStore, InMemoryRecordStore};
use uuid::Uuid;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn event(d: u32, metric: MetricKind, amount: f64) -> ActivityEvent {
    ActivityEvent::new(day(d), metric, amount).unwrap()
}

#[tokio::test]
async fn test_profile_round_trip() -> Result<()> {
    let store = InMemoryRecordStore::new();
    let user = Uuid::new_v4();
    assert!(store.get_profile(user).await?.is_none());

    let mut profile = UserProfile::new(user, Some("Sam".to_owned()), None);
    profile.progress.streak_days = 4;
    store.set_profile(&profile).await?;

    let loaded = store.get_profile(user).await?.unwrap();
    assert_eq!(loaded.progress.streak_days, 4);
    assert_eq!(loaded.display_name.as_deref(), Some("Sam"));
    assert!(!loaded.settings.notifications_enabled);
    Ok(())
}

#[tokio::test]
async fn test_last_write_wins_per_day_and_metric() -> Result<()> {
    let store = InMemoryRecordStore::new();
    let user = Uuid::new_v4();

    store.append_event(user, event(10, MetricKind::Water, 500.0)).await?;
    store.append_event(user, event(10, MetricKind::Water, 1200.0)).await?;
    store.append_event(user, event(10, MetricKind::Calories, 1800.0)).await?;

    let events = store.query_events_in_range(user, day(10), day(10)).await?;
    assert_eq!(events.len(), 2);
    let water = events
        .iter()
        .find(|e| e.metric() == MetricKind::Water)
        .unwrap();
    assert!((water.amount() - 1200.0).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_range_query_is_inclusive_ordered_and_per_user() -> Result<()> {
    let store = InMemoryRecordStore::new();
    let user = Uuid::new_v4();
    let other = Uuid::new_v4();

    for d in [12, 8, 10, 9, 15, 16] {
        store.append_event(user, event(d, MetricKind::Duration, f64::from(d))).await?;
    }
    store.append_event(other, event(10, MetricKind::Duration, 99.0)).await?;

    let dates: Vec<NaiveDate> = store
        .query_events_in_range(user, day(9), day(15))
        .await?
        .iter()
        .map(ActivityEvent::date)
        .collect();
    assert_eq!(dates, vec![day(9), day(10), day(12), day(15)]);
    Ok(())
}

#[tokio::test]
async fn test_sessions_newest_first_and_replaced_by_id() -> Result<()> {
    let store = InMemoryRecordStore::new();
    let user = Uuid::new_v4();

    store.save_workout_session(&WorkoutSession::new("a", user, day(3), 20.0, 150.0)).await?;
    store.save_workout_session(&WorkoutSession::new("b", user, day(7), 30.0, 250.0)).await?;
    store.save_workout_session(&WorkoutSession::new("a", user, day(3), 25.0, 180.0)).await?;

    let sessions = store.list_workout_sessions(user).await?;
    let ids: Vec<&str> = sessions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert!((sessions[1].total_duration_minutes - 25.0).abs() < f64::EPSILON);

    assert!(store.list_workout_sessions(Uuid::new_v4()).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_offline_store_reports_unavailable() -> Result<()> {
    let store = InMemoryRecordStore::new();
    let handle = store.clone();
    let user = Uuid::new_v4();

    handle.set_offline(true);
    assert!(store.is_offline());

    let err = store.get_profile(user).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(err.code.is_transient());
    assert!(store
        .append_event(user, event(1, MetricKind::Water, 1.0))
        .await
        .is_err());
    assert!(store.health_check().await.is_err());

    handle.set_offline(false);
    store.health_check().await?;
    assert!(store.get_profile(user).await?.is_none());
    Ok(())
}
