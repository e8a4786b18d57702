// ABOUTME: Forecast configuration for strength projections
// ABOUTME: Configures the day offsets at which future 1RM values are projected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ironpath_core::constants::forecast::DEFAULT_HORIZON_DAYS;
use serde::{Deserialize, Serialize};

/// Forecast Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Day offsets projected from the reference date
    pub horizon_days: Vec<u32>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS.to_vec(),
        }
    }
}
