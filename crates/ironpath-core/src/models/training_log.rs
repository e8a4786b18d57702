// ABOUTME: Strength training log models consumed by the analytics engine
// ABOUTME: SetEntry (raw logged set) and ExerciseHistoryPoint (per-session 1RM estimate)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged set of an exercise
///
/// Immutable once logged. Validation of `reps` and `weight` happens when the set is
/// converted into a 1RM estimate.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use ironpath_core::models::SetEntry;
///
/// let set = SetEntry::new("back_squat", 5, 100.0, Utc::now());
/// assert_eq!(set.reps, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Exercise the set belongs to
    pub exercise_name: String,
    /// Repetitions completed (must be >= 1)
    pub reps: u32,
    /// Load lifted in kilograms (must be >= 0)
    pub weight: f64,
    /// When the set was performed
    pub performed_at: DateTime<Utc>,
}

impl SetEntry {
    /// Create a set entry
    pub fn new(
        exercise_name: impl Into<String>,
        reps: u32,
        weight: f64,
        performed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            reps,
            weight,
            performed_at,
        }
    }
}

/// Estimated 1RM for one exercise in one session
///
/// Derived from the heaviest effective set of the session: capability is represented
/// by the best effort, not the average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistoryPoint {
    /// Session timestamp
    pub date: DateTime<Utc>,
    /// Estimated one-repetition maximum (kg)
    #[serde(rename = "estimated_1rm")]
    pub estimated_1rm: f64,
    /// Exercise the estimate belongs to
    pub exercise_name: String,
}

impl ExerciseHistoryPoint {
    /// Create a history point
    pub fn new(exercise_name: impl Into<String>, date: DateTime<Utc>, estimated_1rm: f64) -> Self {
        Self {
            date,
            estimated_1rm,
            exercise_name: exercise_name.into(),
        }
    }
}
