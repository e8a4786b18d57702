// ABOUTME: Periodization configuration for weight prescriptions
// ABOUTME: Configures the practical loading increment prescriptions are rounded to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ironpath_core::constants::periodization::DEFAULT_ROUNDING_INCREMENT_KG;
use serde::{Deserialize, Serialize};

/// Periodization Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationConfig {
    /// Prescribed weights are rounded to the nearest multiple of this (kg)
    pub rounding_increment_kg: f64,
}

impl Default for PeriodizationConfig {
    fn default() -> Self {
        Self {
            rounding_increment_kg: DEFAULT_ROUNDING_INCREMENT_KG,
        }
    }
}
