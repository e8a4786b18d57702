// ABOUTME: Periodized training program models with phases and intensity ranges
// ABOUTME: PeriodizedProgram, ProgramPhase, PhaseType, and IntensityRange definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Training emphasis of a program phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseType {
    /// Moderate loads, higher volume
    Hypertrophy,
    /// Heavy loads, moderate volume
    Strength,
    /// Near-maximal loads, low volume
    Peaking,
}

impl fmt::Display for PhaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hypertrophy => write!(f, "HYPERTROPHY"),
            Self::Strength => write!(f, "STRENGTH"),
            Self::Peaking => write!(f, "PEAKING"),
        }
    }
}

impl FromStr for PhaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HYPERTROPHY" => Ok(Self::Hypertrophy),
            "STRENGTH" => Ok(Self::Strength),
            "PEAKING" => Ok(Self::Peaking),
            _ => Err(format!("Unknown phase type: {s}")),
        }
    }
}

/// Fraction-of-1RM band prescribed during a phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityRange {
    /// Lower bound as a fraction of 1RM (0.60 = 60%)
    pub min_pct: f64,
    /// Upper bound as a fraction of 1RM
    pub max_pct: f64,
}

impl IntensityRange {
    /// Create an intensity range
    #[must_use]
    pub const fn new(min_pct: f64, max_pct: f64) -> Self {
        Self { min_pct, max_pct }
    }

    /// Center of the band, the fraction used for prescriptions
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        f64::midpoint(self.min_pct, self.max_pct)
    }
}

/// One contiguous block of weeks sharing a training emphasis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramPhase {
    /// Training emphasis
    pub phase_type: PhaseType,
    /// First week of the phase (1-based, inclusive)
    pub start_week: u32,
    /// Last week of the phase (inclusive)
    pub end_week: u32,
    /// Prescribed intensity band
    pub intensity_range: IntensityRange,
}

impl ProgramPhase {
    /// Whether `week` falls inside this phase
    #[must_use]
    pub const fn contains(&self, week: u32) -> bool {
        week >= self.start_week && week <= self.end_week
    }
}

/// An athlete's active multi-week program
///
/// Phases partition `[1, total_weeks]` contiguously. `current_week` is a derived view
/// filled in from the clock when the program is read; the stored copy keeps whatever
/// week was current at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodizedProgram {
    /// Owning athlete
    pub athlete_id: Uuid,
    /// Day the program began
    pub start_date: DateTime<Utc>,
    /// Week the athlete is in (1-based)
    pub current_week: u32,
    /// Ordered phase table
    pub phases: Vec<ProgramPhase>,
    /// Write counter used for compare-and-swap replacement
    pub revision: u64,
}

impl PeriodizedProgram {
    /// Number of weeks the phase table covers
    #[must_use]
    pub fn total_weeks(&self) -> u32 {
        self.phases.last().map_or(0, |phase| phase.end_week)
    }

    /// Phase covering `week`, if any
    #[must_use]
    pub fn phase_for_week(&self, week: u32) -> Option<&ProgramPhase> {
        self.phases.iter().find(|phase| phase.contains(week))
    }

    /// Phase covering the current week
    #[must_use]
    pub fn current_phase(&self) -> Option<&ProgramPhase> {
        self.phase_for_week(self.current_week)
    }
}
