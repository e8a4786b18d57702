// ABOUTME: Core data models for strength logs, exercise history, and periodized programs
// ABOUTME: Re-exports SetEntry, ExerciseHistoryPoint, PeriodizedProgram and template types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Inputs arrive from the external log store already validated at the CRUD layer;
//! the engine still rejects malformed values at its own boundary rather than clamping.
//!
//! ## Core Models
//!
//! - `SetEntry`: one logged set (reps x weight) of an exercise
//! - `ExerciseHistoryPoint`: per-session 1RM estimate derived from sets
//! - `PeriodizedProgram`: an athlete's multi-week phase table
//! - `WorkoutTemplate`: the exercise list a prescription query covers

mod program;
mod template;
mod training_log;

pub use program::{IntensityRange, PeriodizedProgram, PhaseType, ProgramPhase};
pub use template::WorkoutTemplate;
pub use training_log::{ExerciseHistoryPoint, SetEntry};
