// ABOUTME: Core types and constants for Fitzy progress tracking
// ABOUTME: Foundation crate with error handling, metric models, goal defaults, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitzy Fitness

#![deny(unsafe_code)]

//! # Fitzy Core
//!
//! Foundation crate providing shared types and constants for Fitzy progress
//! tracking. The computational crate (`fitzy-intelligence`) and the
//! application crate both build on these types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Goal defaults, motivation thresholds, cache record names
//! - **models**: Metric kinds, activity events, progress state, goals, catalog records
//! - **config**: Environment-driven progress configuration

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MetricKind`, `ActivityEvent`, `ProgressState`, ...)
pub mod models;

/// Progress configuration loaded from the environment
pub mod config;
