// ABOUTME: Environment configuration tests for goals, cache and logging settings
// ABOUTME: Serialized because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitzy_progress::config::cache::{
    default_cache_dir, ENV_CACHE_BACKEND, ENV_CACHE_DIR, ENV_CACHE_MAX_ENTRIES,
};
use fitzy_progress::config::{AppConfig, CacheBackend, CacheConfig, ProgressConfig};
use fitzy_progress::constants::cache::DEFAULT_CACHE_MAX_ENTRIES;
use fitzy_progress::logging::{LogFormat, LoggingConfig, ENV_LOG_FORMAT, ENV_RUST_LOG};
use fitzy_progress::models::{MetricKind, WeeklyGoals};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const GOAL_VARS: [&str; 3] = [
    "FITZY_GOAL_WATER_ML",
    "FITZY_GOAL_EXERCISE_MINUTES",
    "FITZY_GOAL_CALORIES",
];

fn clear_env() {
    for var in GOAL_VARS {
        env::remove_var(var);
    }
    for var in [
        ENV_CACHE_BACKEND,
        ENV_CACHE_DIR,
        ENV_CACHE_MAX_ENTRIES,
        ENV_LOG_FORMAT,
        ENV_RUST_LOG,
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_progress_config_defaults_without_env() {
    clear_env();
    let config = ProgressConfig::from_env();
    assert_eq!(config.default_goals, WeeklyGoals::default());
    assert_eq!(config, ProgressConfig::default());
}

#[test]
#[serial]
fn test_goal_overrides_and_invalid_values() {
    clear_env();
    env::set_var("FITZY_GOAL_WATER_ML", "2500");
    env::set_var("FITZY_GOAL_EXERCISE_MINUTES", "-10");
    env::set_var("FITZY_GOAL_CALORIES", "lots");

    let goals = ProgressConfig::from_env().default_goals;
    assert!((goals.daily(MetricKind::Water) - 2500.0).abs() < f64::EPSILON);
    assert!((goals.daily(MetricKind::Duration) - 30.0).abs() < f64::EPSILON);
    assert!((goals.daily(MetricKind::Calories) - 2000.0).abs() < f64::EPSILON);
    clear_env();
}

#[test]
#[serial]
fn test_cache_config_from_env() {
    clear_env();
    env::set_var(ENV_CACHE_BACKEND, "in-memory");
    env::set_var(ENV_CACHE_MAX_ENTRIES, "32");
    env::set_var(ENV_CACHE_DIR, "/tmp/fitzy-test-cache");

    let config = CacheConfig::from_env();
    assert_eq!(config.backend, CacheBackend::Memory);
    assert_eq!(config.max_entries, 32);
    assert_eq!(config.directory, PathBuf::from("/tmp/fitzy-test-cache"));
    clear_env();
}

#[test]
#[serial]
fn test_cache_config_ignores_invalid_values() {
    clear_env();
    env::set_var(ENV_CACHE_BACKEND, "redis");
    env::set_var(ENV_CACHE_MAX_ENTRIES, "0");
    env::set_var(ENV_CACHE_DIR, "   ");

    let config = CacheConfig::from_env();
    assert_eq!(config.backend, CacheBackend::File);
    assert_eq!(config.max_entries, DEFAULT_CACHE_MAX_ENTRIES);
    assert_eq!(config.directory, default_cache_dir());
    clear_env();
}

#[test]
fn test_cache_backend_parsing() {
    assert_eq!("memory".parse::<CacheBackend>().unwrap(), CacheBackend::Memory);
    assert_eq!("Disk".parse::<CacheBackend>().unwrap(), CacheBackend::File);
    assert!("sqlite".parse::<CacheBackend>().is_err());
    assert_eq!(CacheBackend::File.to_string(), "file");
}

#[test]
#[serial]
fn test_app_config_combines_sections() {
    clear_env();
    env::set_var("FITZY_GOAL_CALORIES", "1800");
    env::set_var(ENV_CACHE_BACKEND, "memory");

    let config = AppConfig::from_env();
    assert!((config.progress.default_goals.daily(MetricKind::Calories) - 1800.0).abs() < f64::EPSILON);
    assert_eq!(config.cache.backend, CacheBackend::Memory);
    assert_ne!(config, AppConfig::default());
    clear_env();
}

#[test]
#[serial]
fn test_logging_format_from_env() {
    clear_env();
    env::set_var(ENV_LOG_FORMAT, "json");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Json);

    env::set_var(ENV_LOG_FORMAT, "fancy");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);
    clear_env();

    let verbose = LoggingConfig::default().verbose();
    assert_eq!(verbose.level, "debug");
    assert!(verbose.verbose);
}

#[test]
#[serial]
fn test_verbose_adds_debug_over_rust_log() {
    clear_env();
    env::set_var(ENV_RUST_LOG, "warn");

    let quiet = LoggingConfig::from_env().env_filter().to_string();
    assert!(quiet.contains("warn"));
    assert!(!quiet.contains("fitzy_progress=debug"));

    let verbose = LoggingConfig::from_env().verbose().env_filter().to_string();
    assert!(verbose.contains("fitzy_progress=debug"));
    assert!(verbose.contains("fitzy_intelligence=debug"));

    env::remove_var(ENV_RUST_LOG);
    let unset = LoggingConfig::default().verbose().env_filter().to_string();
    assert!(unset.contains("fitzy_progress=debug"));
}
