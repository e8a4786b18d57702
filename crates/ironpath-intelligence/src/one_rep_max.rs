// ABOUTME: One-repetition maximum estimation using the Epley strength-curve formula
// ABOUTME: Groups raw set logs into time-gapped sessions, one history point per session (heaviest set)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, TimeDelta, Utc};
use ironpath_core::constants::strength::{EPLEY_REPS_DIVISOR, MIN_REPS};
use ironpath_core::constants::time::SESSION_GAP_HOURS;
use ironpath_core::errors::{AppError, AppResult};
use ironpath_core::models::{ExerciseHistoryPoint, SetEntry};
use std::collections::BTreeMap;
use tracing::debug;

/// Per-exercise history, ordered by exercise name
pub type HistoryByExercise = BTreeMap<String, Vec<ExerciseHistoryPoint>>;

/// 1RM estimator
pub struct OneRepMaxEstimator;

impl OneRepMaxEstimator {
    /// Estimate the one-repetition maximum for a set
    ///
    /// Epley formula: `1RM = weight * (1 + reps / 30)`. A single rep returns the
    /// weight unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `reps` is zero or `weight` is negative or not finite
    pub fn estimate(reps: u32, weight: f64) -> AppResult<f64> {
        if reps < MIN_REPS {
            return Err(AppError::invalid_input(format!(
                "Reps must be at least {MIN_REPS}, got {reps}"
            )));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be a non-negative number, got {weight}"
            )));
        }

        if reps == 1 {
            return Ok(weight);
        }

        Ok(weight * (1.0 + f64::from(reps) / EPLEY_REPS_DIVISOR))
    }

    /// Estimate the 1RM of a logged set
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for malformed reps or weight
    pub fn estimate_set(set: &SetEntry) -> AppResult<f64> {
        Self::estimate(set.reps, set.weight).map_err(|e| e.with_resource_id(&set.exercise_name))
    }

    /// Build per-exercise session history from raw set logs
    ///
    /// Sets of an exercise are ordered by time; a gap of more than
    /// [`SESSION_GAP_HOURS`] since the previous set starts a new session, so a workout
    /// that runs past midnight stays one session. Each session contributes one point
    /// carrying the maximum estimate across its sets, stamped with its first set.
    /// Points are ordered by date.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any set is malformed; the whole batch is rejected
    pub fn build_history(sets: &[SetEntry]) -> AppResult<HistoryByExercise> {
        let mut efforts: BTreeMap<&str, Vec<(DateTime<Utc>, f64)>> = BTreeMap::new();
        for set in sets {
            let estimate = Self::estimate_set(set)?;
            efforts
                .entry(set.exercise_name.as_str())
                .or_default()
                .push((set.performed_at, estimate));
        }

        let session_gap = TimeDelta::hours(SESSION_GAP_HOURS);
        let mut history = HistoryByExercise::new();
        for (exercise, mut timeline) in efforts {
            timeline.sort_by_key(|(performed_at, _)| *performed_at);

            let mut points: Vec<ExerciseHistoryPoint> = Vec::new();
            let mut previous_set: Option<DateTime<Utc>> = None;
            for (performed_at, estimate) in timeline {
                let same_session =
                    previous_set.is_some_and(|previous| performed_at - previous <= session_gap);
                match points.last_mut() {
                    Some(point) if same_session => {
                        point.estimated_1rm = point.estimated_1rm.max(estimate);
                    }
                    _ => points.push(ExerciseHistoryPoint::new(exercise, performed_at, estimate)),
                }
                previous_set = Some(performed_at);
            }

            history.insert(exercise.to_owned(), points);
        }

        debug!(
            sets = sets.len(),
            exercises = history.len(),
            "Aggregated set logs into session history"
        );

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_epley_values() {
        assert!((OneRepMaxEstimator::estimate(10, 90.0).unwrap() - 120.0).abs() < 1e-9);
        assert!((OneRepMaxEstimator::estimate(3, 100.0).unwrap() - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_weight_is_valid() {
        assert_eq!(OneRepMaxEstimator::estimate(12, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        assert!(OneRepMaxEstimator::estimate(5, f64::NAN).is_err());
        assert!(OneRepMaxEstimator::estimate(5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_session_takes_heaviest_effective_set() {
        let morning = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
        let sets = vec![
            SetEntry::new("bench_press", 8, 80.0, morning),
            SetEntry::new("bench_press", 1, 100.0, morning + Duration::minutes(20)),
            SetEntry::new("bench_press", 5, 90.0, morning + Duration::minutes(10)),
        ];

        let history = OneRepMaxEstimator::build_history(&sets).unwrap();
        let bench = &history["bench_press"];

        assert_eq!(bench.len(), 1);
        // 90 x 5 -> 105, beats the 100 single and 80 x 8 -> 101.33
        assert!((bench[0].estimated_1rm - 105.0).abs() < 1e-9);
        assert_eq!(bench[0].date, morning);
    }
}
