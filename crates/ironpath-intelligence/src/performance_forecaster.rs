// ABOUTME: Strength forecasting from a fitted 1RM trend
// ABOUTME: Projects horizon values, time-to-goal, and a deceleration flag with a one-standard-error band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: day counts are ceil'd, non-negative

use crate::config::ForecastConfig;
use crate::statistical_analysis::TrendModel;
use chrono::{DateTime, TimeDelta, Utc};
use ironpath_core::constants::forecast::{DAYS_TO_GOAL_TOLERANCE, DECELERATION_TOLERANCE};
use ironpath_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Projected 1RM at one horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonForecast {
    /// Days after the reference date
    pub days: u32,
    /// Calendar date of the projection
    pub date: DateTime<Utc>,
    /// Projected 1RM (kg), never negative
    pub value: f64,
}

/// Goal and horizon projections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPrediction {
    /// Requested goal weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Whole days until the trend reaches the goal; `None` when unreachable or no goal
    pub days_to_goal: Option<u32>,
    /// Calendar date the goal is reached
    pub predicted_date: Option<DateTime<Utc>>,
    /// Projected 1RM 30 days out
    pub forecast_30_days: f64,
    /// Projected 1RM 60 days out
    pub forecast_60_days: f64,
    /// Projected 1RM 90 days out
    pub forecast_90_days: f64,
    /// Projections at the configured horizons
    pub horizons: Vec<HorizonForecast>,
}

/// Forecast for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Starting 1RM for projections
    #[serde(rename = "current_1rm")]
    pub current_1rm: f64,
    /// Trend slope expressed per week (kg)
    pub rate_of_gain_per_week: f64,
    /// Goodness of fit of the underlying trend
    pub r_squared: f64,
    /// One residual standard error, for rendering a band; not a 95% interval
    pub margin_of_error: f64,
    /// Recent-half slope is below the full-history slope
    pub is_decelerating: bool,
    /// Goal and horizon projections
    pub prediction: GoalPrediction,
}

/// Performance forecaster
#[derive(Debug, Clone, Default)]
pub struct PerformanceForecaster {
    config: ForecastConfig,
}

impl PerformanceForecaster {
    /// Create a forecaster with default horizons
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecaster with custom configuration
    #[must_use]
    pub const fn with_config(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Project strength from a fitted trend
    ///
    /// - horizons: `current_value + rate_of_gain_per_week * days / 7`, floored at 0
    /// - goal at or below `current_value`: `days_to_goal = 0`
    /// - goal above with a positive slope: `ceil((target - current) / slope_per_day)`
    /// - goal above with a flat or falling slope: unreachable, `days_to_goal = None`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `current_value` or `target_weight` is negative or not finite
    pub fn forecast(
        &self,
        model: &TrendModel,
        reference_date: DateTime<Utc>,
        current_value: f64,
        target_weight: Option<f64>,
    ) -> AppResult<ForecastResult> {
        if !current_value.is_finite() || current_value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Current value must be a non-negative number, got {current_value}"
            )));
        }
        if let Some(target) = target_weight {
            if !target.is_finite() || target < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "Target weight must be a non-negative number, got {target}"
                )));
            }
        }

        let rate_of_gain_per_week = model.rate_of_gain_per_week();
        let project = |days: u32| {
            rate_of_gain_per_week
                .mul_add(f64::from(days) / 7.0, current_value)
                .max(0.0)
        };

        let horizons = self
            .config
            .horizon_days
            .iter()
            .filter_map(|&days| {
                let date = offset_date(reference_date, i64::from(days))?;
                Some(HorizonForecast {
                    days,
                    date,
                    value: project(days),
                })
            })
            .collect();

        let days_to_goal =
            target_weight.and_then(|target| days_to_goal(model.slope_per_day, current_value, target));
        let predicted_date =
            days_to_goal.and_then(|days| offset_date(reference_date, i64::from(days)));

        let is_decelerating = model
            .recent_slope_per_day
            .is_some_and(|recent| recent < model.slope_per_day - DECELERATION_TOLERANCE);

        debug!(
            rate_of_gain_per_week,
            is_decelerating,
            ?days_to_goal,
            "Computed strength forecast"
        );

        Ok(ForecastResult {
            current_1rm: current_value,
            rate_of_gain_per_week,
            r_squared: model.r_squared,
            margin_of_error: model.residual_std_error,
            is_decelerating,
            prediction: GoalPrediction {
                target_weight,
                days_to_goal,
                predicted_date,
                forecast_30_days: project(30),
                forecast_60_days: project(60),
                forecast_90_days: project(90),
                horizons,
            },
        })
    }
}

/// Whole days for the trend to climb from `current` to `target`
fn days_to_goal(slope_per_day: f64, current: f64, target: f64) -> Option<u32> {
    if target <= current {
        return Some(0);
    }
    if slope_per_day <= 0.0 {
        return None;
    }

    let raw = (target - current) / slope_per_day;
    if !raw.is_finite() || raw > f64::from(u32::MAX) {
        return None;
    }

    Some((raw - DAYS_TO_GOAL_TOLERANCE).ceil().max(0.0) as u32)
}

/// `reference + days`, `None` past the representable calendar
fn offset_date(reference: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    TimeDelta::try_days(days).and_then(|delta| reference.checked_add_signed(delta))
}
