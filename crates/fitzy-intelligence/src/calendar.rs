// ABOUTME: Calendar helpers over workout sessions: month grids, day lookups, chart events
// ABOUTME: Linear scans over small session lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

use chrono::{Datelike, NaiveDate};
use fitzy_core::models::{ActivityEvent, MetricKind, WorkoutSession};
use tracing::warn;

/// Every day of `month` in `year`, ascending; empty for an invalid month
#[must_use]
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|day| day.month() == month)
        .collect()
}

/// Sessions dated inside `month` of `year`, in input order
#[must_use]
pub fn sessions_in_month(
    sessions: &[WorkoutSession],
    year: i32,
    month: u32,
) -> Vec<&WorkoutSession> {
    sessions
        .iter()
        .filter(|s| s.date.year() == year && s.date.month() == month)
        .collect()
}

/// First session logged on `date`
#[must_use]
pub fn session_on(sessions: &[WorkoutSession], date: NaiveDate) -> Option<&WorkoutSession> {
    sessions.iter().find(|s| s.date == date)
}

/// Whether any session was logged on `date`
#[must_use]
pub fn has_workout(sessions: &[WorkoutSession], date: NaiveDate) -> bool {
    session_on(sessions, date).is_some()
}

/// Calories and duration events for one session, dated on the session day
///
/// Totals that cannot form a valid event (negative or non-finite) are skipped.
#[must_use]
pub fn session_events(session: &WorkoutSession) -> Vec<ActivityEvent> {
    [
        (MetricKind::Calories, session.calories_burned),
        (MetricKind::Duration, session.total_duration_minutes),
    ]
    .into_iter()
    .filter_map(
        |(metric, amount)| match ActivityEvent::new(session.date, metric, amount) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(session_id = %session.id, %metric, error = %e, "Skipping invalid session total");
                None
            }
        },
    )
    .collect()
}

/// Events for every session, suitable for weekly aggregation
#[must_use]
pub fn sessions_to_events(sessions: &[WorkoutSession]) -> Vec<ActivityEvent> {
    sessions.iter().flat_map(session_events).collect()
}

/// Monday-based slot of `date`: Monday = 0 .. Sunday = 6
#[must_use]
pub fn monday_slot(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sessions() -> Vec<WorkoutSession> {
        let user = Uuid::new_v4();
        vec![
            WorkoutSession::new("a", user, date(2025, 2, 3), 30.0, 250.0),
            WorkoutSession::new("b", user, date(2025, 2, 27), 45.0, 400.0),
            WorkoutSession::new("c", user, date(2025, 3, 1), 20.0, 150.0),
        ]
    }

    #[test]
    fn test_month_days_handles_lengths() {
        assert_eq!(month_days(2024, 2).len(), 29);
        assert_eq!(month_days(2025, 2).len(), 28);
        assert_eq!(month_days(2025, 12).last(), Some(&date(2025, 12, 31)));
        assert!(month_days(2025, 13).is_empty());
    }

    #[test]
    fn test_sessions_in_month() {
        let all = sessions();
        let feb: Vec<&str> = sessions_in_month(&all, 2025, 2)
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(feb, vec!["a", "b"]);
        assert!(sessions_in_month(&all, 2024, 2).is_empty());
    }

    #[test]
    fn test_day_lookup() {
        let all = sessions();
        assert_eq!(session_on(&all, date(2025, 3, 1)).map(|s| s.id.as_str()), Some("c"));
        assert!(has_workout(&all, date(2025, 2, 27)));
        assert!(!has_workout(&all, date(2025, 2, 28)));
    }

    #[test]
    fn test_session_events() {
        let session = WorkoutSession::new("x", Uuid::new_v4(), date(2025, 2, 3), 30.0, 250.0);
        let events = session_events(&session);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.date() == date(2025, 2, 3)));
        assert!(events
            .iter()
            .any(|e| e.metric() == MetricKind::Calories && (e.amount() - 250.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_invalid_session_totals_skipped() {
        let session = WorkoutSession::new("x", Uuid::new_v4(), date(2025, 2, 3), f64::NAN, 250.0);
        let events = session_events(&session);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].metric(), MetricKind::Calories);
        assert_eq!(sessions_to_events(&sessions()).len(), 6);
    }

    #[test]
    fn test_monday_slot() {
        // 2025-06-09 is a Monday
        assert_eq!(monday_slot(date(2025, 6, 9)), 0);
        assert_eq!(monday_slot(date(2025, 6, 12)), 3);
        assert_eq!(monday_slot(date(2025, 6, 15)), 6);
    }
}
