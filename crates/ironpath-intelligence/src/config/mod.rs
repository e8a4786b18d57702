// ABOUTME: Configuration module for ironpath-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (forecast, plateau, periodization)
pub mod intelligence;

pub use intelligence::{
    ConfigError, ForecastConfig, IntelligenceConfig, PeriodizationConfig, PlateauConfig,
};
