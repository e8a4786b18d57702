// ABOUTME: Strength analytics engine: 1RM estimation, trend regression, and forecasting
// ABOUTME: Plateau detection and phase-based periodization, all pure and re-entrant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # IronPath Intelligence
//!
//! The algorithmic core of the engine. Every function here is a pure computation over
//! caller-supplied data: no I/O, no global clock, no shared mutable state. Safe to call
//! concurrently for different athletes or exercises without locking.
//!
//! Dependency order, leaves first:
//!
//! 1. [`one_rep_max`] - set (reps, weight) to estimated 1RM
//! 2. [`statistical_analysis`] - least-squares trend over per-session estimates
//! 3. [`performance_forecaster`] - horizon projections and time-to-goal
//! 4. [`plateau_detection`] - stagnation flags with programming suggestions
//! 5. [`periodization`] - phase table, week derivation, weight prescription

/// Intelligence configuration (forecast horizons, plateau thresholds, rounding)
pub mod config;

/// Epley 1RM estimation and session aggregation
pub mod one_rep_max;

/// Strength forecasting from a fitted trend
pub mod performance_forecaster;

/// Phase tables, week derivation, and weight prescription
pub mod periodization;

/// Plateau detection over recent sessions
pub mod plateau_detection;

/// Least-squares trend fitting over 1RM history
pub mod statistical_analysis;

pub use config::IntelligenceConfig;
pub use one_rep_max::OneRepMaxEstimator;
pub use performance_forecaster::{ForecastResult, GoalPrediction, PerformanceForecaster};
pub use periodization::{ExercisePrescription, PeriodizationPlanner};
pub use plateau_detection::{PlateauDetector, PlateauResult, PlateauStatus};
pub use statistical_analysis::{TrendModel, TrendRegressor};
