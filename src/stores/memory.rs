// ABOUTME: In-memory store implementations backed by sharded concurrent maps
// ABOUTME: Program replacement is a per-athlete compare-and-swap under the map's entry lock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{LogStore, ProgramStore, TemplateStore};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use ironpath_core::errors::{AppError, AppResult};
use ironpath_core::models::{ExerciseHistoryPoint, PeriodizedProgram, SetEntry, WorkoutTemplate};
use ironpath_intelligence::one_rep_max::HistoryByExercise;
use ironpath_intelligence::OneRepMaxEstimator;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Raw set logs per athlete, aggregated into session history on read
#[derive(Clone, Default)]
pub struct InMemoryLogStore {
    sets: Arc<DashMap<Uuid, Vec<SetEntry>>>,
}

impl InMemoryLogStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append logged sets for an athlete
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any set is malformed; nothing is stored in that case
    pub fn record_sets(&self, athlete_id: Uuid, sets: Vec<SetEntry>) -> AppResult<()> {
        for set in &sets {
            OneRepMaxEstimator::estimate_set(set).map_err(|e| e.with_athlete_id(athlete_id))?;
        }

        debug!(%athlete_id, count = sets.len(), "Recording training sets");
        self.sets.entry(athlete_id).or_default().extend(sets);
        Ok(())
    }

    fn snapshot(&self, athlete_id: Uuid) -> Vec<SetEntry> {
        self.sets
            .get(&athlete_id)
            .map(|sets| sets.value().clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LogStore for InMemoryLogStore {
    async fn history(
        &self,
        athlete_id: Uuid,
        exercise_name: &str,
    ) -> AppResult<Vec<ExerciseHistoryPoint>> {
        let sets: Vec<SetEntry> = self
            .snapshot(athlete_id)
            .into_iter()
            .filter(|set| set.exercise_name == exercise_name)
            .collect();

        let mut history = OneRepMaxEstimator::build_history(&sets)?;
        Ok(history.remove(exercise_name).unwrap_or_default())
    }

    async fn histories(&self, athlete_id: Uuid) -> AppResult<HistoryByExercise> {
        OneRepMaxEstimator::build_history(&self.snapshot(athlete_id))
    }
}

/// Active program per athlete
#[derive(Clone, Default)]
pub struct InMemoryProgramStore {
    programs: Arc<DashMap<Uuid, PeriodizedProgram>>,
}

impl InMemoryProgramStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgramStore for InMemoryProgramStore {
    async fn get(&self, athlete_id: Uuid) -> AppResult<Option<PeriodizedProgram>> {
        Ok(self
            .programs
            .get(&athlete_id)
            .map(|program| program.value().clone()))
    }

    async fn replace(
        &self,
        athlete_id: Uuid,
        expected_revision: Option<u64>,
        mut program: PeriodizedProgram,
    ) -> AppResult<PeriodizedProgram> {
        if program.athlete_id != athlete_id {
            return Err(AppError::invalid_input(format!(
                "Program belongs to athlete {}, not {athlete_id}",
                program.athlete_id
            )));
        }

        // The entry guard holds the shard lock until the write completes
        match self.programs.entry(athlete_id) {
            Entry::Occupied(mut entry) => {
                let stored = entry.get().revision;
                if expected_revision != Some(stored) {
                    warn!(%athlete_id, stored, ?expected_revision, "Program write lost the race");
                    return Err(stale_write(athlete_id, expected_revision, Some(stored)));
                }
                program.revision = stored + 1;
                entry.insert(program.clone());
            }
            Entry::Vacant(entry) => {
                if expected_revision.is_some() {
                    warn!(%athlete_id, ?expected_revision, "Program write lost the race");
                    return Err(stale_write(athlete_id, expected_revision, None));
                }
                program.revision = 1;
                entry.insert(program.clone());
            }
        }

        Ok(program)
    }
}

fn stale_write(athlete_id: Uuid, expected: Option<u64>, stored: Option<u64>) -> AppError {
    AppError::conflict("Program was modified concurrently")
        .with_athlete_id(athlete_id)
        .with_details(serde_json::json!({
            "expected_revision": expected,
            "stored_revision": stored,
        }))
}

/// Workout templates keyed by id
#[derive(Clone, Default)]
pub struct InMemoryTemplateStore {
    templates: Arc<DashMap<String, WorkoutTemplate>>,
}

impl InMemoryTemplateStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite a template
    pub fn insert(&self, template: WorkoutTemplate) {
        self.templates.insert(template.template_id.clone(), template);
    }
}

#[async_trait]
impl TemplateStore for InMemoryTemplateStore {
    async fn template(&self, template_id: &str) -> AppResult<Option<WorkoutTemplate>> {
        Ok(self
            .templates
            .get(template_id)
            .map(|template| template.value().clone()))
    }
}
