// ABOUTME: Intelligence module configuration for strength analytics and periodization
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Thresholds that product requirements may still move (plateau epsilon, rounding
//! increment, forecast horizons) live here rather than in code.
//!
//! # Module Structure
//!
//! - `forecast` - projection horizons
//! - `plateau` - stagnation window and thresholds
//! - `periodization` - prescription rounding
//!
//! # Environment Overrides
//!
//! ```bash
//! export IRONPATH_PLATEAU_WINDOW_SIZE=5
//! export IRONPATH_PLATEAU_THRESHOLD_PCT=0.015
//! export IRONPATH_PLATEAU_MIN_WEEKLY_SESSIONS=1.5
//! export IRONPATH_ROUNDING_INCREMENT_KG=1.25
//! export IRONPATH_FORECAST_HORIZONS=14,30,60
//! ```

pub mod error;
pub mod forecast;
pub mod periodization;
pub mod plateau;

pub use error::ConfigError;
pub use forecast::ForecastConfig;
pub use periodization::PeriodizationConfig;
pub use plateau::PlateauConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Environment variable overriding the plateau window size
pub const ENV_PLATEAU_WINDOW_SIZE: &str = "IRONPATH_PLATEAU_WINDOW_SIZE";
/// Environment variable overriding the plateau threshold fraction
pub const ENV_PLATEAU_THRESHOLD_PCT: &str = "IRONPATH_PLATEAU_THRESHOLD_PCT";
/// Environment variable overriding the weekly frequency cutoff
pub const ENV_PLATEAU_MIN_WEEKLY_SESSIONS: &str = "IRONPATH_PLATEAU_MIN_WEEKLY_SESSIONS";
/// Environment variable overriding the prescription rounding increment
pub const ENV_ROUNDING_INCREMENT_KG: &str = "IRONPATH_ROUNDING_INCREMENT_KG";
/// Environment variable overriding forecast horizons (comma separated days)
pub const ENV_FORECAST_HORIZONS: &str = "IRONPATH_FORECAST_HORIZONS";

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Forecast horizons
    pub forecast: ForecastConfig,
    /// Plateau detection thresholds
    pub plateau: PlateauConfig,
    /// Periodization prescription settings
    pub periodization: PeriodizationConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| env::var(name).ok())
    }

    /// Load configuration using `lookup` as the variable source
    ///
    /// # Errors
    ///
    /// Returns an error if a variable fails to parse or validation fails
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self::default().apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plateau.window_size < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "plateau window_size must be at least 2",
            ));
        }

        if !(0.0..1.0).contains(&self.plateau.threshold_pct) {
            return Err(ConfigError::ValueOutOfRange(
                "plateau threshold_pct must be in [0, 1)",
            ));
        }

        if !self.plateau.min_weekly_sessions.is_finite() || self.plateau.min_weekly_sessions < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "plateau min_weekly_sessions must be non-negative",
            ));
        }

        let increment = self.periodization.rounding_increment_kg;
        if !increment.is_finite() || increment <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "rounding_increment_kg must be positive",
            ));
        }

        if self.forecast.horizon_days.is_empty() {
            return Err(ConfigError::InvalidRange(
                "forecast horizon_days must not be empty",
            ));
        }

        if self.forecast.horizon_days.contains(&0) {
            return Err(ConfigError::ValueOutOfRange(
                "forecast horizon_days must be positive",
            ));
        }

        Ok(())
    }

    /// Apply variable overrides
    fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = parse_var(&lookup, ENV_PLATEAU_WINDOW_SIZE)? {
            self.plateau.window_size = value;
        }

        if let Some(value) = parse_var(&lookup, ENV_PLATEAU_THRESHOLD_PCT)? {
            self.plateau.threshold_pct = value;
        }

        if let Some(value) = parse_var(&lookup, ENV_PLATEAU_MIN_WEEKLY_SESSIONS)? {
            self.plateau.min_weekly_sessions = value;
        }

        if let Some(value) = parse_var(&lookup, ENV_ROUNDING_INCREMENT_KG)? {
            self.periodization.rounding_increment_kg = value;
        }

        if let Some(raw) = lookup(ENV_FORECAST_HORIZONS) {
            self.forecast.horizon_days = raw
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| {
                    part.parse()
                        .map_err(|_| ConfigError::Parse(format!("Invalid {ENV_FORECAST_HORIZONS}")))
                })
                .collect::<Result<_, _>>()?;
        }

        Ok(self)
    }
}

/// Parse an optional variable, mapping parse failures to `ConfigError::Parse`
fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, ConfigError> {
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))
        })
        .transpose()
}
