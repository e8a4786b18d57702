// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default thresholds and formula constants for strength analytics and periodization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.
//! Anything a deployment may want to tune is mirrored by a field in the intelligence
//! configuration; the values here are the defaults.

/// Strength-curve formula constants
pub mod strength {
    /// Divisor in the Epley formula `1RM = weight * (1 + reps / 30)`
    pub const EPLEY_REPS_DIVISOR: f64 = 30.0;
    /// Smallest rep count a logged set may carry
    pub const MIN_REPS: u32 = 1;
}

/// Calendar arithmetic
pub mod time {
    /// Days in a training week
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Seconds in a day, used to convert timestamps into fractional elapsed days
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Sets of one exercise closer together than this belong to the same session
    pub const SESSION_GAP_HOURS: i64 = 4;
}

/// Trend regression and forecasting defaults
pub mod forecast {
    /// Minimum number of distinct-date points for a trend fit
    pub const MIN_REGRESSION_POINTS: usize = 2;
    /// Default forecast horizons in days
    pub const DEFAULT_HORIZON_DAYS: [u32; 3] = [30, 60, 90];
    /// Tolerance subtracted before rounding days-to-goal up, absorbs float noise
    pub const DAYS_TO_GOAL_TOLERANCE: f64 = 1e-9;
    /// Recent slope must trail the full slope by more than this (kg/day) to count as deceleration
    pub const DECELERATION_TOLERANCE: f64 = 1e-9;
}

/// Plateau detection defaults
pub mod plateau {
    /// Number of most recent sessions examined per exercise
    pub const DEFAULT_WINDOW_SIZE: usize = 4;
    /// Gain across the window at or below this fraction of the current 1RM is a plateau
    pub const DEFAULT_THRESHOLD_PCT: f64 = 0.01;
    /// Below this average weekly session count the suggestion is to train more often
    pub const DEFAULT_MIN_WEEKLY_SESSIONS: f64 = 1.0;
    /// Suggestion text when sessions are too infrequent
    pub const SUGGESTION_INCREASE_FREQUENCY: &str = "increase frequency";
    /// Suggestion text when strength is falling
    pub const SUGGESTION_DELOAD: &str = "deload";
    /// Suggestion text when strength is flat at adequate frequency
    pub const SUGGESTION_VARY_REP_RANGE: &str = "vary rep range";
}

/// Periodized program defaults
pub mod periodization {
    /// Total weeks in the default program
    pub const DEFAULT_TOTAL_WEEKS: u32 = 12;
    /// Default rounding increment for prescribed weights (kg)
    pub const DEFAULT_ROUNDING_INCREMENT_KG: f64 = 2.5;
    /// Hypertrophy block: weeks 1-4 at 60-75% of 1RM
    pub const HYPERTROPHY_WEEKS: (u32, u32) = (1, 4);
    /// Hypertrophy intensity range as fractions of 1RM
    pub const HYPERTROPHY_INTENSITY: (f64, f64) = (0.60, 0.75);
    /// Strength block: weeks 5-8 at 80-90% of 1RM
    pub const STRENGTH_WEEKS: (u32, u32) = (5, 8);
    /// Strength intensity range as fractions of 1RM
    pub const STRENGTH_INTENSITY: (f64, f64) = (0.80, 0.90);
    /// Peaking block: weeks 9-12 at 90-100% of 1RM
    pub const PEAKING_WEEKS: (u32, u32) = (9, 12);
    /// Peaking intensity range as fractions of 1RM
    pub const PEAKING_INTENSITY: (f64, f64) = (0.90, 1.00);
}

/// Service identifiers for structured logging
pub mod service_names {
    /// Name reported by the engine's log records
    pub const IRONPATH_ENGINE: &str = "ironpath-engine";
}
