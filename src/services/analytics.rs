// ABOUTME: Analytics service facade over training logs, programs, and templates
// ABOUTME: Forecasts, plateau checks, program lifecycle, and template weight suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::clock::Clock;
use crate::stores::{LogStore, ProgramStore, TemplateStore};
use ironpath_core::errors::{AppError, AppResult};
use ironpath_core::models::PeriodizedProgram;
use ironpath_intelligence::{
    ExercisePrescription, ForecastResult, IntelligenceConfig, PerformanceForecaster,
    PeriodizationPlanner, PlateauDetector, PlateauResult, TrendRegressor,
};
use std::sync::Arc;
use tokio::task;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Engine facade
///
/// Holds no per-athlete state of its own: every call reads the stores and the clock,
/// so one instance can serve any number of concurrent requests.
#[derive(Clone)]
pub struct AnalyticsService {
    clock: Arc<dyn Clock>,
    logs: Arc<dyn LogStore>,
    programs: Arc<dyn ProgramStore>,
    templates: Arc<dyn TemplateStore>,
    forecaster: PerformanceForecaster,
    detector: PlateauDetector,
    planner: PeriodizationPlanner,
}

impl AnalyticsService {
    /// Create a service over the given collaborators
    #[must_use]
    pub fn new(
        config: &IntelligenceConfig,
        clock: Arc<dyn Clock>,
        logs: Arc<dyn LogStore>,
        programs: Arc<dyn ProgramStore>,
        templates: Arc<dyn TemplateStore>,
    ) -> Self {
        Self {
            clock,
            logs,
            programs,
            templates,
            forecaster: PerformanceForecaster::with_config(config.forecast.clone()),
            detector: PlateauDetector::with_config(config.plateau.clone()),
            planner: PeriodizationPlanner::with_config(config.periodization.clone()),
        }
    }

    /// Trend, projections, and optional time-to-goal for one exercise
    ///
    /// The current 1RM is the trend value at the clock's now, so projections and the
    /// goal date stay on the fitted line even when the last session is weeks old.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` with fewer than two distinct session dates and
    /// `InvalidInput` for a malformed target
    #[instrument(skip(self))]
    pub async fn advanced_analytics(
        &self,
        athlete_id: Uuid,
        exercise_name: &str,
        target_weight: Option<f64>,
    ) -> AppResult<ForecastResult> {
        let history = self.logs.history(athlete_id, exercise_name).await?;
        let model = TrendRegressor::fit(&history).map_err(|e| {
            e.with_athlete_id(athlete_id)
                .with_resource_id(exercise_name)
        })?;

        let now = self.clock.now();
        self.forecaster
            .forecast(&model, now, model.value_at(now).max(0.0), target_weight)
            .map_err(|e| e.with_athlete_id(athlete_id))
    }

    /// Plateau verdicts for every exercise with enough recent sessions
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or the detection task fails
    #[instrument(skip(self))]
    pub async fn plateaus(&self, athlete_id: Uuid) -> AppResult<Vec<PlateauResult>> {
        let histories = self.logs.histories(athlete_id).await?;
        let detector = self.detector.clone();

        task::spawn_blocking(move || detector.detect(&histories))
            .await
            .map_err(|e| AppError::internal(format!("Plateau detection task failed: {e}")))?
            .map_err(|e| e.with_athlete_id(athlete_id))
    }

    /// Start a fresh default program at week 1, replacing any existing one
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` if a concurrent write replaced the program first
    #[instrument(skip(self))]
    pub async fn initiate_program(&self, athlete_id: Uuid) -> AppResult<PeriodizedProgram> {
        let now = self.clock.now();
        let existing = self.programs.get(athlete_id).await?;
        let program = PeriodizationPlanner::new_program(athlete_id, now);

        let stored = self
            .programs
            .replace(athlete_id, existing.map(|p| p.revision), program)
            .await?;

        info!(
            %athlete_id,
            revision = stored.revision,
            total_weeks = stored.total_weeks(),
            "Initiated periodized program"
        );

        Ok(PeriodizationPlanner::with_current_week(&stored, now))
    }

    /// The athlete's program with its week derived from the clock
    ///
    /// # Errors
    ///
    /// Returns an error if the program store cannot be read
    pub async fn active_program(&self, athlete_id: Uuid) -> AppResult<Option<PeriodizedProgram>> {
        let now = self.clock.now();
        Ok(self
            .programs
            .get(athlete_id)
            .await?
            .map(|program| PeriodizationPlanner::with_current_week(&program, now)))
    }

    /// Move the athlete's program forward one week
    ///
    /// # Errors
    ///
    /// Returns `NoActiveProgram` without a program and `ResourceLocked` if a concurrent
    /// write replaced it first
    #[instrument(skip(self))]
    pub async fn advance_week(&self, athlete_id: Uuid) -> AppResult<PeriodizedProgram> {
        let program = self.require_program(athlete_id).await?;
        let advanced = PeriodizationPlanner::advance_week(&program)?;

        let stored = self
            .programs
            .replace(athlete_id, Some(program.revision), advanced)
            .await?;

        let now = self.clock.now();
        let view = PeriodizationPlanner::with_current_week(&stored, now);
        info!(%athlete_id, week = view.current_week, "Advanced program week");
        Ok(view)
    }

    /// Phase-adjusted working weight for an exercise given its current 1RM
    ///
    /// # Errors
    ///
    /// Returns `NoActiveProgram` without a program and `InvalidInput` for a negative or
    /// non-finite 1RM
    pub async fn prescribed_weight(
        &self,
        athlete_id: Uuid,
        exercise_name: &str,
        current_1rm: f64,
    ) -> AppResult<f64> {
        let program = self.require_program(athlete_id).await?;
        let weight = self
            .planner
            .prescribed_weight(&program, self.clock.now(), current_1rm)
            .map_err(|e| e.with_resource_id(exercise_name))?;

        debug!(%athlete_id, exercise_name, weight, "Prescribed weight");
        Ok(weight)
    }

    /// Prescriptions for each exercise of a workout template
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown template and `NoActiveProgram` without
    /// a program
    #[instrument(skip(self))]
    pub async fn suggested_weights(
        &self,
        athlete_id: Uuid,
        template_id: &str,
    ) -> AppResult<Vec<ExercisePrescription>> {
        let template = self
            .templates
            .template(template_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Workout template {template_id}"))
                    .with_resource_id(template_id)
            })?;

        let program = self.require_program(athlete_id).await?;
        let histories = self.logs.histories(athlete_id).await?;

        self.planner.suggested_weights(
            &program,
            self.clock.now(),
            &template.exercises,
            &histories,
        )
    }

    async fn require_program(&self, athlete_id: Uuid) -> AppResult<PeriodizedProgram> {
        self.programs
            .get(athlete_id)
            .await?
            .ok_or_else(|| AppError::no_active_program(athlete_id))
    }
}
