// ABOUTME: Workout template model listing the exercises of a planned session
// ABOUTME: Supplied by the external template store for suggested-weight queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Planned workout whose exercises receive weight prescriptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Template identifier
    pub template_id: String,
    /// Display name
    pub name: String,
    /// Exercises in session order
    pub exercises: Vec<String>,
}
