// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, dated set builders, and a service wired to in-memory stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_wrap
)]
//! Shared test utilities for `ironpath`

use chrono::{DateTime, Duration, TimeZone, Utc};
use ironpath::clock::ManualClock;
use ironpath::config::IntelligenceConfig;
use ironpath::models::{ExerciseHistoryPoint, SetEntry, WorkoutTemplate};
use ironpath::services::AnalyticsService;
use ironpath::stores::{InMemoryLogStore, InMemoryProgramStore, InMemoryTemplateStore};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, default WARN keeps test output quiet
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed Monday morning every fixture is dated from
pub fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap()
}

/// `base_date() + days`
pub fn day(days: i64) -> DateTime<Utc> {
    base_date() + Duration::days(days)
}

/// History points `(day offset, 1RM)` for one exercise
pub fn history(exercise: &str, points: &[(i64, f64)]) -> Vec<ExerciseHistoryPoint> {
    points
        .iter()
        .map(|&(offset, value)| ExerciseHistoryPoint::new(exercise, day(offset), value))
        .collect()
}

/// Single-rep sets whose estimate equals the logged weight
pub fn single_sets(exercise: &str, points: &[(i64, f64)]) -> Vec<SetEntry> {
    points
        .iter()
        .map(|&(offset, weight)| SetEntry::new(exercise, 1, weight, day(offset)))
        .collect()
}

/// Squat logged weekly for eight weeks gaining exactly 2 kg per week from 100 kg
pub fn linear_squat_points() -> Vec<(i64, f64)> {
    (0..8).map(|week| (week * 7, 100.0 + 2.0 * week as f64)).collect()
}

/// Service over in-memory stores with a manually driven clock
pub struct TestEngine {
    pub service: AnalyticsService,
    pub clock: Arc<ManualClock>,
    pub logs: InMemoryLogStore,
    pub programs: InMemoryProgramStore,
    pub templates: InMemoryTemplateStore,
}

/// Build an engine with default configuration, clock frozen at `now`
pub fn test_engine(now: DateTime<Utc>) -> TestEngine {
    test_engine_with_config(now, &IntelligenceConfig::default())
}

/// Build an engine with custom configuration, clock frozen at `now`
pub fn test_engine_with_config(now: DateTime<Utc>, config: &IntelligenceConfig) -> TestEngine {
    init_test_logging();

    let clock = Arc::new(ManualClock::new(now));
    let logs = InMemoryLogStore::new();
    let programs = InMemoryProgramStore::new();
    let templates = InMemoryTemplateStore::new();

    let service = AnalyticsService::new(
        config,
        clock.clone(),
        Arc::new(logs.clone()),
        Arc::new(programs.clone()),
        Arc::new(templates.clone()),
    );

    TestEngine {
        service,
        clock,
        logs,
        programs,
        templates,
    }
}

/// Template with the given exercises
pub fn template(id: &str, exercises: &[&str]) -> WorkoutTemplate {
    WorkoutTemplate {
        template_id: id.to_owned(),
        name: format!("{id} day"),
        exercises: exercises.iter().map(|e| (*e).to_owned()).collect(),
    }
}
