// ABOUTME: Fitzy progress CLI for weekly summaries, streak replays and goal management
// ABOUTME: Reads activity events from JSON files and goals from the configured local cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness
//!
//! Usage:
//! ```bash
//! # Weekly summary of logged events ending today
//! fitzy-progress summary --events week.json
//!
//! # Monday-start calendar week containing a given day
//! fitzy-progress summary --events week.json --date 2025-06-12 --window calendar
//!
//! # Replay completion dates through the streak calculator
//! fitzy-progress streak --dates 2025-06-01,2025-06-02,2025-06-04
//!
//! # Show or change daily goals
//! fitzy-progress goals show
//! fitzy-progress goals set water 2500
//! ```

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use fitzy_progress::cache::{Cache, CacheRecord, LocalFallback};
use fitzy_progress::config::AppConfig;
use fitzy_progress::logging::LoggingConfig;
use fitzy_progress::models::{ActivityEvent, MetricKind, ProgressState, WeeklyGoals};
use fitzy_progress::{
    aggregate_in_window, classify_streak_event, compute_progress, streak_meter_percent,
    update_streak, WeekWindow,
};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitzy-progress",
    about = "Fitzy progress tracking CLI",
    long_about = "Weekly summaries, streak replays and goal management for Fitzy progress tracking."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging for the fitzy crates, on top of any `RUST_LOG` filter
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Aggregate logged events into a week and compare against goals
    Summary {
        /// JSON file holding an array of `{date, metric, amount}` events
        #[arg(long)]
        events: PathBuf,

        /// Reference day (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Which seven days to aggregate
        #[arg(long, value_enum, default_value_t = WindowArg::Rolling)]
        window: WindowArg,
    },

    /// Replay completion dates through the streak calculator
    Streak {
        /// Comma-separated completion dates (YYYY-MM-DD)
        #[arg(long, value_delimiter = ',', required = true)]
        dates: Vec<NaiveDate>,
    },

    /// Goal management commands
    Goals {
        #[command(subcommand)]
        action: GoalsCommand,
    },
}

#[derive(Subcommand)]
enum GoalsCommand {
    /// Print the current daily and weekly goals
    Show,

    /// Change one daily goal
    Set {
        /// Metric: water, exercise or calories
        metric: MetricKind,

        /// New daily target
        value: f64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WindowArg {
    /// Seven days ending at the reference day
    Rolling,
    /// Monday through Sunday of the reference day's week
    Calendar,
}

impl From<WindowArg> for WeekWindow {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Rolling => Self::Rolling,
            WindowArg::Calendar => Self::CalendarWeek,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging.init()?;

    let config = AppConfig::from_env();
    let fallback = LocalFallback::new(Cache::new(&config.cache));
    let goals: WeeklyGoals = fallback
        .load_cached(CacheRecord::WeeklyGoals)
        .await
        .unwrap_or(config.progress.default_goals);

    match cli.command {
        Command::Summary {
            events,
            date,
            window,
        } => {
            let reference = date.unwrap_or_else(|| Local::now().date_naive());
            summary(&events, reference, window.into(), &goals).await?;
        }
        Command::Streak { dates } => streak(&dates),
        Command::Goals { action } => match action {
            GoalsCommand::Show => show_goals(&goals),
            GoalsCommand::Set { metric, value } => {
                let updated = goals.with_target(metric, value)?;
                if !fallback
                    .save_cached(CacheRecord::WeeklyGoals, &updated)
                    .await
                {
                    bail!(
                        "failed to save goals to the {} cache",
                        fallback.inner().backend()
                    );
                }
                info!(%metric, value, "Goal updated");
                show_goals(&updated);
            }
        },
    }

    Ok(())
}

async fn summary(
    path: &Path,
    reference: NaiveDate,
    window: WeekWindow,
    goals: &WeeklyGoals,
) -> Result<()> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read events file {}", path.display()))?;
    let events: Vec<ActivityEvent> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid events in {}", path.display()))?;
    info!(count = events.len(), %reference, ?window, "Loaded activity events");

    let series = aggregate_in_window(&events, window, reference);
    let progress = compute_progress(&series.totals(), goals);

    println!("Week {} .. {} ({window:?})", series.start, series.end());
    let labels = series.weekday_labels();
    for (slot, label) in labels.iter().enumerate() {
        let day = series.day(slot).unwrap_or(series.start);
        let values: Vec<String> = MetricKind::ALL
            .iter()
            .map(|&metric| {
                format!(
                    "{metric} {:>7.0} {}",
                    series.series(metric)[slot],
                    metric.unit()
                )
            })
            .collect();
        println!("  {label} {day}  {}", values.join("  "));
    }

    let totals = series.totals();
    println!();
    for metric in MetricKind::ALL {
        println!(
            "  {:<20} total {:>8.0} / {:>8.0} {}  ({}%)",
            metric.label(),
            totals[metric],
            goals.weekly(metric),
            metric.unit(),
            progress.percent[metric]
        );
    }
    println!("  Active days {}/7", series.active_days());
    println!();
    println!(
        "Average {:.1}% - {}: {}",
        progress.average,
        progress.tier,
        progress.tier.message()
    );
    Ok(())
}

fn streak(dates: &[NaiveDate]) {
    let mut state = ProgressState::default();
    for &date in dates {
        let outcome = classify_streak_event(state.last_activity_date, date);
        state = update_streak(state, date);
        println!(
            "{date}  {:<10}  streak {:>3}  meter {:>3}%",
            outcome.as_str(),
            state.streak_days,
            streak_meter_percent(state.streak_days)
        );
    }
}

fn show_goals(goals: &WeeklyGoals) {
    for metric in MetricKind::ALL {
        println!(
            "{:<8} daily {:>8.0} {:<4} weekly {:>8.0} {}",
            metric.key(),
            goals.daily(metric),
            metric.unit(),
            goals.weekly(metric),
            metric.unit()
        );
    }
}
