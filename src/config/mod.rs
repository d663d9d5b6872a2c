// ABOUTME: Application configuration aggregated from environment variables
// ABOUTME: Combines progress goal defaults with local cache settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

//! Configuration module
//!
//! Configuration is environment-only:
//!
//! - **Progress**: default daily goals (`FITZY_GOAL_*`)
//! - **Cache**: local fallback backend, capacity and directory (`FITZY_CACHE_*`)
//!
//! Logging has its own `LoggingConfig` in [`crate::logging`].

/// Local cache configuration
pub mod cache;

pub use cache::{CacheBackend, CacheConfig};
pub use fitzy_core::config::ProgressConfig;

use tracing::debug;

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// Goal defaults
    pub progress: ProgressConfig,
    /// Local cache settings
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load every section from the environment
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            progress: ProgressConfig::from_env(),
            cache: CacheConfig::from_env(),
        };
        debug!(
            cache.backend = %config.cache.backend,
            cache.directory = %config.cache.directory.display(),
            cache.max_entries = config.cache.max_entries,
            "Loaded configuration from environment"
        );
        config
    }
}
