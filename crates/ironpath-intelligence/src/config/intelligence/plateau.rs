// ABOUTME: Plateau detection configuration
// ABOUTME: Configures the session window, stagnation threshold, and frequency cutoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ironpath_core::constants::plateau::{
    DEFAULT_MIN_WEEKLY_SESSIONS, DEFAULT_THRESHOLD_PCT, DEFAULT_WINDOW_SIZE,
};
use serde::{Deserialize, Serialize};

/// Plateau Detection Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauConfig {
    /// Most recent sessions examined per exercise
    pub window_size: usize,
    /// Gain at or below this fraction of current 1RM counts as stagnation
    pub threshold_pct: f64,
    /// Average weekly sessions below which more frequency is suggested
    pub min_weekly_sessions: f64,
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            threshold_pct: DEFAULT_THRESHOLD_PCT,
            min_weekly_sessions: DEFAULT_MIN_WEEKLY_SESSIONS,
        }
    }
}
