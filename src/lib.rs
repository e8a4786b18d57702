// ABOUTME: Main library entry point for the IronPath strength analytics engine
// ABOUTME: Wires pure analytics algorithms to storage, an injected clock, config, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # IronPath
//!
//! Strength analytics and periodization for athletes' training logs.
//!
//! ## Features
//!
//! - **1RM estimation**: Epley estimates per set, aggregated per session
//! - **Trend analysis**: least-squares rate of gain with goodness of fit
//! - **Forecasting**: 30/60/90-day projections and time-to-goal
//! - **Plateau detection**: stagnating lifts with a programming suggestion
//! - **Periodization**: 12-week phased programs with rounded weight prescriptions
//!
//! ## Architecture
//!
//! - `ironpath-core`: errors, models, constants
//! - `ironpath-intelligence`: the algorithms, pure and re-entrant
//! - this crate: [`stores`], [`clock`], and the [`services::AnalyticsService`] facade
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ironpath::clock::SystemClock;
//! use ironpath::config::environment::EngineConfig;
//! use ironpath::errors::AppResult;
//! use ironpath::services::AnalyticsService;
//! use ironpath::stores::{InMemoryLogStore, InMemoryProgramStore, InMemoryTemplateStore};
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = EngineConfig::from_env()?;
//!     let service = AnalyticsService::new(
//!         &config.intelligence,
//!         Arc::new(SystemClock),
//!         Arc::new(InMemoryLogStore::new()),
//!         Arc::new(InMemoryProgramStore::new()),
//!         Arc::new(InMemoryTemplateStore::new()),
//!     );
//!
//!     let program = service.initiate_program(Uuid::new_v4()).await?;
//!     println!("Program starts in week {}", program.current_week);
//!     Ok(())
//! }
//! ```

/// Injectable time source
pub mod clock;

/// Environment configuration and intelligence thresholds
pub mod config;

/// Unified error types
pub mod errors;

/// JSON set log loading
pub mod log_import;

/// Structured logging setup
pub mod logging;

/// Domain models
pub mod models;

/// Domain service layer
pub mod services;

/// Storage abstractions and in-memory implementations
pub mod stores;

pub use ironpath_intelligence as intelligence;
