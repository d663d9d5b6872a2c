// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Selects json/pretty/compact output and log level from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

//! Structured logging configuration

use crate::constants::service_names;
use anyhow::{anyhow, Result};
use std::env;
use std::fmt;
use std::io;
use std::str::FromStr;
use tracing::{info, Level};
use tracing_subscriber::{fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the output format
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
/// Standard filter directive variable
pub const ENV_RUST_LOG: &str = "RUST_LOG";

const VERBOSE_TARGETS: [&str; 3] = ["fitzy_progress", "fitzy_core", "fitzy_intelligence"];

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` lines for log shipping
    Json,
    /// Full human readable output
    Pretty,
    /// Single-line output
    #[default]
    Compact,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Pretty => f.write_str("pretty"),
            Self::Compact => f.write_str("compact"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(anyhow!("unknown log format '{other}'")),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Force debug output for this crate's targets, even over `RUST_LOG`
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::default(),
            include_location: false,
            service_name: service_names::FITZY_PROGRESS.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            verbose: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var(ENV_RUST_LOG).unwrap_or(defaults.level),
            format: env::var(ENV_LOG_FORMAT)
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            ..defaults
        }
    }

    /// Same configuration with `level` raised to debug
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.level = "debug".into();
        self.verbose = true;
        self
    }

    /// Build the filter
    ///
    /// `RUST_LOG` wins over `level` when set. Verbose mode then adds debug
    /// directives for the workspace crates on top of whichever base applies.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = EnvFilter::try_from_env(ENV_RUST_LOG).unwrap_or_else(|_| {
            EnvFilter::new(&self.level).add_directive(
                format!("fitzy_progress={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| Level::INFO.into()),
            )
        });
        if !self.verbose {
            return base;
        }
        VERBOSE_TARGETS.iter().fold(base, |filter, target| {
            match format!("{target}=debug").parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        })
    }

    /// Initialize the global tracing subscriber
    ///
    /// Logs go to stderr so command output on stdout stays clean.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    tracing_fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    tracing_fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    tracing_fmt::layer()
                        .compact()
                        .with_file(false)
                        .with_line_number(false)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        result.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = %self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
