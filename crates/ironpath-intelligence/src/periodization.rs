// ABOUTME: Periodized program construction, week derivation, and phase-adjusted weight prescription
// ABOUTME: Default hypertrophy, strength, and peaking blocks with loads rounded to plate increments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)] // Safe: week numbers are clamped to the phase table

use crate::config::PeriodizationConfig;
use crate::one_rep_max::HistoryByExercise;
use crate::statistical_analysis::{elapsed_days, TrendRegressor};
use chrono::{DateTime, TimeDelta, Utc};
use ironpath_core::constants::periodization::{
    HYPERTROPHY_INTENSITY, HYPERTROPHY_WEEKS, PEAKING_INTENSITY, PEAKING_WEEKS,
    STRENGTH_INTENSITY, STRENGTH_WEEKS,
};
use ironpath_core::constants::time::DAYS_PER_WEEK;
use ironpath_core::errors::{AppError, AppResult};
use ironpath_core::models::{IntensityRange, PeriodizedProgram, PhaseType, ProgramPhase};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Target load for one exercise of a workout template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePrescription {
    /// Exercise the load applies to
    pub exercise_name: String,
    /// Current 1RM the load was derived from (kg), zero without history
    pub one_rm: f64,
    /// Load rounded to the configured increment (kg)
    pub prescribed_weight: f64,
}

/// Periodization planner
///
/// Stateless over programs: every method takes the program and the current instant
/// explicitly, so callers own storage and the clock.
#[derive(Debug, Clone, Default)]
pub struct PeriodizationPlanner {
    config: PeriodizationConfig,
}

impl PeriodizationPlanner {
    /// Create a planner with the default rounding increment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a planner with custom configuration
    #[must_use]
    pub const fn with_config(config: PeriodizationConfig) -> Self {
        Self { config }
    }

    /// The default 12-week block structure
    #[must_use]
    pub fn default_phases() -> Vec<ProgramPhase> {
        [
            (PhaseType::Hypertrophy, HYPERTROPHY_WEEKS, HYPERTROPHY_INTENSITY),
            (PhaseType::Strength, STRENGTH_WEEKS, STRENGTH_INTENSITY),
            (PhaseType::Peaking, PEAKING_WEEKS, PEAKING_INTENSITY),
        ]
        .into_iter()
        .map(|(phase_type, (start_week, end_week), (min_pct, max_pct))| ProgramPhase {
            phase_type,
            start_week,
            end_week,
            intensity_range: IntensityRange::new(min_pct, max_pct),
        })
        .collect()
    }

    /// Fresh program at week 1 using the default phase table
    #[must_use]
    pub fn new_program(athlete_id: Uuid, start_date: DateTime<Utc>) -> PeriodizedProgram {
        PeriodizedProgram {
            athlete_id,
            start_date,
            current_week: 1,
            phases: Self::default_phases(),
            revision: 0,
        }
    }

    /// Check that `phases` partition `[1, total_weeks]` contiguously
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` on gaps, overlaps, inverted week ranges, intensity bounds
    /// outside `[0, 1]`, or a table that does not end at `total_weeks`
    pub fn validate_phases(phases: &[ProgramPhase], total_weeks: u32) -> AppResult<()> {
        if phases.is_empty() || total_weeks == 0 {
            return Err(AppError::invalid_input("Program must contain at least one week"));
        }

        let mut expected_start = 1;
        for phase in phases {
            if phase.start_week != expected_start {
                return Err(AppError::invalid_input(format!(
                    "{} phase starts at week {}, expected week {expected_start}",
                    phase.phase_type, phase.start_week
                )));
            }
            if phase.end_week < phase.start_week {
                return Err(AppError::invalid_input(format!(
                    "{} phase ends before it starts",
                    phase.phase_type
                )));
            }

            let range = phase.intensity_range;
            if !(0.0..=1.0).contains(&range.min_pct)
                || !(0.0..=1.0).contains(&range.max_pct)
                || range.min_pct > range.max_pct
            {
                return Err(AppError::invalid_input(format!(
                    "{} phase has an invalid intensity range",
                    phase.phase_type
                )));
            }

            expected_start = phase.end_week + 1;
        }

        if expected_start - 1 != total_weeks {
            return Err(AppError::invalid_input(format!(
                "Phases cover {} weeks, program has {total_weeks}",
                expected_start - 1
            )));
        }

        Ok(())
    }

    /// Week of the program at `now`: `floor(days_elapsed / 7) + 1`, clamped to the table
    #[must_use]
    pub fn current_week_at(program: &PeriodizedProgram, now: DateTime<Utc>) -> u32 {
        let days_elapsed = elapsed_days(program.start_date, now).floor();
        let weeks_elapsed = (days_elapsed / DAYS_PER_WEEK as f64).floor().max(0.0);
        let week = if weeks_elapsed >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            weeks_elapsed as u32 + 1
        };

        week.min(program.total_weeks()).max(1)
    }

    /// Copy of `program` with `current_week` derived from `now`
    #[must_use]
    pub fn with_current_week(program: &PeriodizedProgram, now: DateTime<Utc>) -> PeriodizedProgram {
        PeriodizedProgram {
            current_week: Self::current_week_at(program, now),
            ..program.clone()
        }
    }

    /// Program moved one week forward by shifting its start date back seven days
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the shifted start date is not representable
    pub fn advance_week(program: &PeriodizedProgram) -> AppResult<PeriodizedProgram> {
        let start_date = TimeDelta::try_days(DAYS_PER_WEEK)
            .and_then(|week| program.start_date.checked_sub_signed(week))
            .ok_or_else(|| AppError::invalid_input("Program start date out of range"))?;

        Ok(PeriodizedProgram {
            start_date,
            ..program.clone()
        })
    }

    /// Round `value` to the nearest multiple of `increment`
    #[must_use]
    pub fn round_to_increment(value: f64, increment: f64) -> f64 {
        if increment <= 0.0 || !increment.is_finite() {
            return value;
        }
        (value / increment).round() * increment
    }

    /// Phase-adjusted load: `one_rm * midpoint(intensity)` rounded to the increment
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `one_rm` is negative or not finite, or the program's
    /// phases do not partition its weeks
    pub fn prescribed_weight(
        &self,
        program: &PeriodizedProgram,
        now: DateTime<Utc>,
        one_rm: f64,
    ) -> AppResult<f64> {
        if !one_rm.is_finite() || one_rm < 0.0 {
            return Err(AppError::invalid_input(format!(
                "1RM must be a non-negative number, got {one_rm}"
            )));
        }

        Self::validate_phases(&program.phases, program.total_weeks())
            .map_err(|e| e.with_athlete_id(program.athlete_id))?;

        let week = Self::current_week_at(program, now);
        let phase = program.phase_for_week(week).ok_or_else(|| {
            AppError::invalid_input(format!("Program has no phase covering week {week}"))
                .with_athlete_id(program.athlete_id)
        })?;

        let raw = one_rm * phase.intensity_range.midpoint();
        let weight = Self::round_to_increment(raw, self.config.rounding_increment_kg);

        debug!(
            week,
            phase = %phase.phase_type,
            one_rm,
            weight,
            "Prescribed phase-adjusted load"
        );

        Ok(weight)
    }

    /// Prescriptions for each exercise of a template
    ///
    /// An exercise's 1RM comes from its trend at the latest session; exercises without
    /// history are prescribed zero.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::prescribed_weight`] failures
    pub fn suggested_weights(
        &self,
        program: &PeriodizedProgram,
        now: DateTime<Utc>,
        exercises: &[String],
        histories: &HistoryByExercise,
    ) -> AppResult<Vec<ExercisePrescription>> {
        exercises
            .iter()
            .map(|exercise| {
                let one_rm = histories
                    .get(exercise)
                    .map_or(0.0, |history| TrendRegressor::current_one_rep_max(history));
                Ok(ExercisePrescription {
                    exercise_name: exercise.clone(),
                    one_rm,
                    prescribed_weight: self.prescribed_weight(program, now, one_rm)?,
                })
            })
            .collect()
    }
}
