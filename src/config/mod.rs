// ABOUTME: Configuration module for the IronPath engine
// ABOUTME: Environment-driven runtime settings plus re-exported intelligence thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based runtime configuration
pub mod environment;

pub use environment::{EngineConfig, Environment, LogLevel, ServerConfig};
pub use ironpath_intelligence::config::{
    ConfigError, ForecastConfig, IntelligenceConfig, PeriodizationConfig, PlateauConfig,
};
