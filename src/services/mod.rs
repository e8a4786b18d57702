// ABOUTME: Domain service layer composing stores, clock, and analytics algorithms
// ABOUTME: Exposes the engine's operations independent of any transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services wire the pure algorithms in `ironpath-intelligence` to storage and the
//! clock. Callers pick their own transport; nothing here knows about HTTP.

/// Forecasting, plateau, and periodization operations for one athlete at a time
pub mod analytics;

pub use analytics::AnalyticsService;
