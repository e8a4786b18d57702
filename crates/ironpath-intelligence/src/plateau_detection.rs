// ABOUTME: Plateau detection over each exercise's most recent training sessions
// ABOUTME: Flags stagnating lifts and selects a fixed-vocabulary programming suggestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: session counts are small

use crate::config::PlateauConfig;
use crate::one_rep_max::HistoryByExercise;
use crate::statistical_analysis::elapsed_days;
use ironpath_core::constants::plateau::{
    SUGGESTION_DELOAD, SUGGESTION_INCREASE_FREQUENCY, SUGGESTION_VARY_REP_RANGE,
};
use ironpath_core::errors::{AppError, AppResult};
use ironpath_core::models::ExerciseHistoryPoint;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Progress state of an exercise over the detection window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlateauStatus {
    /// Gains above the stagnation threshold
    Progressing,
    /// Negligible or negative gains across the window
    Plateau,
}

/// Plateau verdict for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauResult {
    /// Exercise examined
    pub exercise_name: String,
    /// Verdict
    pub status: PlateauStatus,
    /// Every exercise flagged as plateaued in the same detection run
    pub last_exercises: BTreeSet<String>,
    /// Programming change to try; only present on a plateau
    pub suggestion: Option<String>,
    /// 1RM change from first to last session in the window (kg)
    pub window_delta: f64,
}

/// Plateau detection engine
#[derive(Debug, Clone, Default)]
pub struct PlateauDetector {
    config: PlateauConfig,
}

impl PlateauDetector {
    /// Create a detector with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom configuration
    #[must_use]
    pub const fn with_config(config: PlateauConfig) -> Self {
        Self { config }
    }

    /// Detect plateaus using the configured window size
    ///
    /// # Errors
    ///
    /// See [`Self::detect_with_window`]
    pub fn detect(&self, histories: &HistoryByExercise) -> AppResult<Vec<PlateauResult>> {
        self.detect_with_window(histories, self.config.window_size)
    }

    /// Detect plateaus over the most recent `window_size` sessions of each exercise
    ///
    /// Exercises with fewer than `window_size` sessions are skipped: not enough data is
    /// not an error. Results are ordered by exercise name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `window_size` is below 2 or a history holds a non-finite estimate
    pub fn detect_with_window(
        &self,
        histories: &HistoryByExercise,
        window_size: usize,
    ) -> AppResult<Vec<PlateauResult>> {
        if window_size < 2 {
            return Err(AppError::invalid_input(format!(
                "Plateau window must cover at least 2 sessions, got {window_size}"
            )));
        }

        let mut results = histories
            .par_iter()
            .filter(|(_, history)| history.len() >= window_size)
            .map(|(exercise, history)| self.evaluate(exercise, history, window_size))
            .collect::<AppResult<Vec<_>>>()?;
        results.sort_by(|a, b| a.exercise_name.cmp(&b.exercise_name));

        let flagged: BTreeSet<String> = results
            .iter()
            .filter(|r| r.status == PlateauStatus::Plateau)
            .map(|r| r.exercise_name.clone())
            .collect();
        for result in &mut results {
            result.last_exercises.clone_from(&flagged);
        }

        debug!(
            examined = results.len(),
            plateaued = flagged.len(),
            "Plateau detection complete"
        );

        Ok(results)
    }

    fn evaluate(
        &self,
        exercise: &str,
        history: &[ExerciseHistoryPoint],
        window_size: usize,
    ) -> AppResult<PlateauResult> {
        if history.iter().any(|p| !p.estimated_1rm.is_finite()) {
            return Err(
                AppError::invalid_input("Non-finite 1RM estimate in history")
                    .with_resource_id(exercise),
            );
        }

        let mut sorted = history.to_vec();
        sorted.sort_by_key(|p| p.date);

        let window = &sorted[sorted.len() - window_size..];
        let first = window[0].estimated_1rm;
        let last = window[window.len() - 1].estimated_1rm;
        let window_delta = last - first;
        let epsilon = self.config.threshold_pct * last.max(0.0);

        let (status, suggestion) = if window_delta <= epsilon {
            let suggestion = if weekly_frequency(&sorted) < self.config.min_weekly_sessions {
                SUGGESTION_INCREASE_FREQUENCY
            } else if window_delta < 0.0 {
                SUGGESTION_DELOAD
            } else {
                SUGGESTION_VARY_REP_RANGE
            };
            (PlateauStatus::Plateau, Some(suggestion.to_owned()))
        } else {
            (PlateauStatus::Progressing, None)
        };

        Ok(PlateauResult {
            exercise_name: exercise.to_owned(),
            status,
            last_exercises: BTreeSet::new(),
            suggestion,
            window_delta,
        })
    }
}

/// Average sessions per week across the whole history, spans under a week count as one
fn weekly_frequency(sorted: &[ExerciseHistoryPoint]) -> f64 {
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return 0.0;
    };
    let weeks = (elapsed_days(first.date, last.date) / 7.0).max(1.0);
    sorted.len() as f64 / weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn history(values: &[f64], spacing_days: i64) -> Vec<ExerciseHistoryPoint> {
        let start = Utc.with_ymd_and_hms(2025, 1, 6, 8, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                ExerciseHistoryPoint::new(
                    "deadlift",
                    start + Duration::days(spacing_days * i as i64),
                    *v,
                )
            })
            .collect()
    }

    #[test]
    fn test_weekly_frequency_short_span_counts_as_one_week() {
        assert!((weekly_frequency(&history(&[1.0, 1.0, 1.0], 1)) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_frequency_sparse_sessions() {
        // 4 sessions spread over 42 days -> 4 / 6 weeks
        let freq = weekly_frequency(&history(&[1.0, 1.0, 1.0, 1.0], 14));
        assert!((freq - 4.0 / 6.0).abs() < 1e-9);
    }
}
