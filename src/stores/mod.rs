// ABOUTME: Storage abstractions the analytics service reads training data and programs through
// ABOUTME: Log, program, and template stores with pluggable backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory store implementations
pub mod memory;

pub use memory::{InMemoryLogStore, InMemoryProgramStore, InMemoryTemplateStore};

use async_trait::async_trait;
use ironpath_core::errors::AppResult;
use ironpath_core::models::{ExerciseHistoryPoint, PeriodizedProgram, WorkoutTemplate};
use ironpath_intelligence::one_rep_max::HistoryByExercise;
use uuid::Uuid;

/// Read access to an athlete's aggregated training history
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Per-session history for one exercise, ordered by date; empty when never trained
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn history(
        &self,
        athlete_id: Uuid,
        exercise_name: &str,
    ) -> AppResult<Vec<ExerciseHistoryPoint>>;

    /// Per-session history for every exercise the athlete has trained
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn histories(&self, athlete_id: Uuid) -> AppResult<HistoryByExercise>;
}

/// Storage for the single active program of each athlete
#[async_trait]
pub trait ProgramStore: Send + Sync {
    /// Stored program, `None` when the athlete has never started one
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, athlete_id: Uuid) -> AppResult<Option<PeriodizedProgram>>;

    /// Atomically replace the athlete's program
    ///
    /// `expected_revision` is the revision the caller read: `None` when it saw no
    /// program. The write only lands if the stored revision still matches; the stored
    /// copy gets the next revision and is returned.
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` when another writer got there first
    async fn replace(
        &self,
        athlete_id: Uuid,
        expected_revision: Option<u64>,
        program: PeriodizedProgram,
    ) -> AppResult<PeriodizedProgram>;
}

/// Lookup of workout templates
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Template by id, `None` when unknown
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn template(&self, template_id: &str) -> AppResult<Option<WorkoutTemplate>>;
}
