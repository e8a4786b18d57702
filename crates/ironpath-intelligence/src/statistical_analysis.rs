// ABOUTME: Least-squares trend fitting over per-session 1RM estimates
// ABOUTME: Computes slope per day, intercept, R-squared, residual standard error, and recent-half slope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are far below 2^52

use chrono::{DateTime, Utc};
use ironpath_core::constants::forecast::MIN_REGRESSION_POINTS;
use ironpath_core::constants::time::SECONDS_PER_DAY;
use ironpath_core::errors::{AppError, AppResult};
use ironpath_core::models::ExerciseHistoryPoint;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// Fitted linear trend of 1RM over time
///
/// Ephemeral: recomputed from history on every query and never persisted on its own.
/// `x` is elapsed days since `reference_date` (the first history point).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendModel {
    /// Rate of change in kg per day
    pub slope_per_day: f64,
    /// Fitted 1RM at `reference_date`
    pub intercept_at_reference: f64,
    /// Coefficient of determination, clamped to [0, 1]
    pub r_squared: f64,
    /// `sqrt(SS_res / (n - 2))`, zero when n <= 2
    pub residual_std_error: f64,
    /// Number of history points fitted
    pub sample_count: usize,
    /// Date of the first history point (x = 0)
    pub reference_date: DateTime<Utc>,
    /// Date of the most recent history point
    pub last_observation_date: DateTime<Utc>,
    /// Slope over the trailing `max(2, ceil(n / 2))` points, `None` without date spread
    pub recent_slope_per_day: Option<f64>,
}

impl TrendModel {
    /// Evaluate the fitted line at `date`
    #[must_use]
    pub fn value_at(&self, date: DateTime<Utc>) -> f64 {
        self.slope_per_day
            .mul_add(elapsed_days(self.reference_date, date), self.intercept_at_reference)
    }

    /// Fitted 1RM at the most recent observation, floored at zero
    #[must_use]
    pub fn latest_fitted_value(&self) -> f64 {
        self.value_at(self.last_observation_date).max(0.0)
    }

    /// Slope expressed per week
    #[must_use]
    pub fn rate_of_gain_per_week(&self) -> f64 {
        self.slope_per_day * 7.0
    }
}

/// Elapsed fractional days between two instants
#[must_use]
pub fn elapsed_days(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / SECONDS_PER_DAY
}

/// Raw ordinary least-squares output
#[derive(Debug, Clone, Copy)]
struct LeastSquaresFit {
    slope: f64,
    intercept: f64,
    ss_res: f64,
    ss_tot: f64,
}

/// Ordinary least squares on centered sums; `None` when x has no variance
fn least_squares(x_values: &[f64], y_values: &[f64]) -> Option<LeastSquaresFit> {
    if x_values.len() < MIN_REGRESSION_POINTS || x_values.len() != y_values.len() {
        return None;
    }

    let n = x_values.len() as f64;
    let mean_x = x_values.iter().sum::<f64>() / n;
    let mean_y = y_values.iter().sum::<f64>() / n;

    let (sxx, sxy) = x_values
        .iter()
        .zip(y_values)
        .fold((0.0_f64, 0.0_f64), |(sxx, sxy), (x, y)| {
            let dx = x - mean_x;
            (dx.mul_add(dx, sxx), dx.mul_add(y - mean_y, sxy))
        });

    if sxx <= f64::EPSILON {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = slope.mul_add(-mean_x, mean_y);

    let (ss_res, ss_tot) =
        x_values
            .iter()
            .zip(y_values)
            .fold((0.0_f64, 0.0_f64), |(ss_res, ss_tot), (x, y)| {
                let residual = y - slope.mul_add(*x, intercept);
                let deviation = y - mean_y;
                (
                    residual.mul_add(residual, ss_res),
                    deviation.mul_add(deviation, ss_tot),
                )
            });

    Some(LeastSquaresFit {
        slope,
        intercept,
        ss_res,
        ss_tot,
    })
}

/// Trend regressor
pub struct TrendRegressor;

impl TrendRegressor {
    /// Fit a linear trend of estimated 1RM against elapsed days
    ///
    /// With exactly two points the fit is exact: `r_squared` is 1.0 and
    /// `residual_std_error` is 0. Unordered input is sorted by date first.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` with fewer than two points or when every point shares
    /// one date, and `InvalidInput` when an estimate is not finite
    pub fn fit(history: &[ExerciseHistoryPoint]) -> AppResult<TrendModel> {
        if history.len() < MIN_REGRESSION_POINTS {
            return Err(AppError::insufficient_data(format!(
                "Insufficient data points for regression: need at least {MIN_REGRESSION_POINTS}, got {}",
                history.len()
            )));
        }

        if let Some(bad) = history.iter().find(|p| !p.estimated_1rm.is_finite()) {
            return Err(AppError::invalid_input(format!(
                "Non-finite 1RM estimate on {}",
                bad.date.to_rfc3339()
            ))
            .with_resource_id(&bad.exercise_name));
        }

        let points: Cow<'_, [ExerciseHistoryPoint]> =
            if history.is_sorted_by_key(|p| p.date) {
                Cow::Borrowed(history)
            } else {
                let mut sorted = history.to_vec();
                sorted.sort_by_key(|p| p.date);
                Cow::Owned(sorted)
            };

        let reference_date = points[0].date;
        let last_observation_date = points[points.len() - 1].date;

        let x_values: Vec<f64> = points
            .iter()
            .map(|p| elapsed_days(reference_date, p.date))
            .collect();
        let y_values: Vec<f64> = points.iter().map(|p| p.estimated_1rm).collect();

        let fit = least_squares(&x_values, &y_values).ok_or_else(|| {
            AppError::insufficient_data(
                "Cannot calculate regression: all history points share the same date",
            )
        })?;

        let sample_count = points.len();
        let degrees_of_freedom = sample_count - MIN_REGRESSION_POINTS;

        let r_squared = if degrees_of_freedom == 0 || fit.ss_tot <= f64::EPSILON {
            1.0
        } else {
            (1.0 - fit.ss_res / fit.ss_tot).clamp(0.0, 1.0)
        };

        let residual_std_error = if degrees_of_freedom > 0 {
            (fit.ss_res / degrees_of_freedom as f64).sqrt()
        } else {
            0.0
        };

        let recent_len = sample_count.div_ceil(2).max(MIN_REGRESSION_POINTS);
        let recent_start = sample_count - recent_len;
        let recent_slope_per_day =
            least_squares(&x_values[recent_start..], &y_values[recent_start..])
                .map(|recent| recent.slope);

        debug!(
            samples = sample_count,
            slope_per_day = fit.slope,
            r_squared,
            "Fitted 1RM trend"
        );

        Ok(TrendModel {
            slope_per_day: fit.slope,
            intercept_at_reference: fit.intercept,
            r_squared,
            residual_std_error,
            sample_count,
            reference_date,
            last_observation_date,
            recent_slope_per_day,
        })
    }

    /// Current 1RM for an exercise: trend value at the latest session
    ///
    /// Falls back to the latest logged estimate when the history cannot be fitted
    /// (one point, or all points on one date), and to zero with no history at all.
    #[must_use]
    pub fn current_one_rep_max(history: &[ExerciseHistoryPoint]) -> f64 {
        match Self::fit(history) {
            Ok(model) => model.latest_fitted_value(),
            Err(_) => history
                .iter()
                .max_by_key(|p| p.date)
                .map_or(0.0, |p| p.estimated_1rm.max(0.0)),
        }
    }
}
