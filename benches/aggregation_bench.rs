// ABOUTME: Criterion benchmarks for the progress calculators
// ABOUTME: Measures weekly aggregation, goal progress and streak replay over event batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

//! Criterion benchmarks for the progress calculators.
//!
//! Event batches span several weeks so most events fall outside the
//! aggregated window, matching what a store range query may hand back.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitzy_progress::models::{ActivityEvent, MetricKind, ProgressState, WeeklyGoals};
use fitzy_progress::{
    aggregate_in_window, aggregate_week, compute_progress, update_streak, WeekWindow,
};

const BATCH_SIZES: [usize; 3] = [10, 100, 1000];

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default()
}

/// Events spread backwards from the reference day, cycling through metrics
fn generate_events(count: usize) -> Vec<ActivityEvent> {
    let reference = reference_day();
    (0..count)
        .filter_map(|index| {
            let date = reference.checked_sub_days(Days::new((index % 28) as u64))?;
            let metric = MetricKind::ALL[index % MetricKind::ALL.len()];
            let amount = 100.0 + ((index * 37) % 500) as f64;
            ActivityEvent::new(date, metric, amount).ok()
        })
        .collect()
}

fn bench_weekly_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_aggregation");
    let reference = reference_day();

    for size in BATCH_SIZES {
        let events = generate_events(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("rolling", size), &events, |b, events| {
            b.iter(|| aggregate_week(black_box(events), black_box(reference)));
        });
        group.bench_with_input(
            BenchmarkId::new("calendar_week", size),
            &events,
            |b, events| {
                b.iter(|| {
                    aggregate_in_window(
                        black_box(events),
                        WeekWindow::CalendarWeek,
                        black_box(reference),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_goal_progress(c: &mut Criterion) {
    let series = aggregate_week(&generate_events(100), reference_day());
    let totals = series.totals();
    let goals = WeeklyGoals::default();

    c.bench_function("compute_progress", |b| {
        b.iter(|| compute_progress(black_box(&totals), black_box(&goals)));
    });
}

fn bench_summary_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary_pipeline");
    let goals = WeeklyGoals::default();

    for size in BATCH_SIZES {
        let events = generate_events(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &events, |b, events| {
            b.iter(|| {
                let series = aggregate_week(black_box(events), reference_day());
                compute_progress(&series.totals(), &goals)
            });
        });
    }

    group.finish();
}

fn bench_streak_replay(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
    // Mostly consecutive days with a gap every ninth entry
    let dates: Vec<NaiveDate> = (0..365_u64)
        .filter(|day| day % 9 != 8)
        .filter_map(|day| start.checked_add_days(Days::new(day)))
        .collect();

    c.bench_function("streak_replay_year", |b| {
        b.iter(|| {
            dates
                .iter()
                .fold(ProgressState::default(), |state, &date| {
                    update_streak(state, black_box(date))
                })
                .streak_days
        });
    });
}

criterion_group!(
    benches,
    bench_weekly_aggregation,
    bench_goal_progress,
    bench_summary_pipeline,
    bench_streak_replay
);
criterion_main!(benches);
