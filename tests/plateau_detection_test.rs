// ABOUTME: Integration tests for plateau detection over recent training sessions
// ABOUTME: Covers stagnation thresholds, suggestion selection, skipped exercises, and run-wide flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::history;
use ironpath_core::constants::plateau::{
    SUGGESTION_DELOAD, SUGGESTION_INCREASE_FREQUENCY, SUGGESTION_VARY_REP_RANGE,
};
use ironpath_core::errors::ErrorCode;
use ironpath_intelligence::config::PlateauConfig;
use ironpath_intelligence::one_rep_max::HistoryByExercise;
use ironpath_intelligence::{PlateauDetector, PlateauStatus};

fn histories(entries: &[(&str, &[(i64, f64)])]) -> HistoryByExercise {
    entries
        .iter()
        .map(|(name, points)| ((*name).to_owned(), history(name, points)))
        .collect()
}

const WEEKLY_FLAT: &[(i64, f64)] = &[(0, 100.0), (7, 100.0), (14, 100.0), (21, 100.0)];

#[test]
fn test_identical_sessions_plateau() {
    let results = PlateauDetector::new()
        .detect(&histories(&[("bench_press", WEEKLY_FLAT)]))
        .unwrap();

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.status, PlateauStatus::Plateau);
    assert_eq!(result.suggestion.as_deref(), Some(SUGGESTION_VARY_REP_RANGE));
    assert!(result.window_delta.abs() < f64::EPSILON);
    assert!(result.last_exercises.contains("bench_press"));
}

#[test]
fn test_steady_gains_progressing() {
    let results = PlateauDetector::new()
        .detect(&histories(&[(
            "back_squat",
            &[(0, 100.0), (7, 102.0), (14, 104.0), (21, 106.0)],
        )]))
        .unwrap();

    assert_eq!(results[0].status, PlateauStatus::Progressing);
    assert_eq!(results[0].suggestion, None);
    assert!(results[0].last_exercises.is_empty());
}

#[test]
fn test_threshold_is_one_percent_of_latest() {
    let results = PlateauDetector::new()
        .detect(&histories(&[
            ("just_under", &[(0, 100.0), (7, 100.5), (14, 100.5), (21, 101.0)]),
            ("just_over", &[(0, 100.0), (7, 101.0), (14, 101.5), (21, 102.0)]),
        ]))
        .unwrap();

    assert_eq!(results[0].exercise_name, "just_over");
    assert_eq!(results[0].status, PlateauStatus::Progressing);
    assert_eq!(results[1].exercise_name, "just_under");
    assert_eq!(results[1].status, PlateauStatus::Plateau);
}

#[test]
fn test_falling_strength_suggests_deload() {
    let results = PlateauDetector::new()
        .detect(&histories(&[(
            "deadlift",
            &[(0, 180.0), (3, 178.0), (7, 176.0), (10, 175.0)],
        )]))
        .unwrap();

    assert_eq!(results[0].status, PlateauStatus::Plateau);
    assert_eq!(results[0].suggestion.as_deref(), Some(SUGGESTION_DELOAD));
    assert!(results[0].window_delta < 0.0);
}

#[test]
fn test_infrequent_training_suggests_more_sessions() {
    // Four sessions over six weeks, under one per week; frequency outranks deload
    let results = PlateauDetector::new()
        .detect(&histories(&[(
            "overhead_press",
            &[(0, 60.0), (14, 60.0), (28, 59.0), (42, 58.0)],
        )]))
        .unwrap();

    assert_eq!(results[0].status, PlateauStatus::Plateau);
    assert_eq!(
        results[0].suggestion.as_deref(),
        Some(SUGGESTION_INCREASE_FREQUENCY)
    );
}

#[test]
fn test_only_recent_window_considered() {
    let results = PlateauDetector::new()
        .detect(&histories(&[(
            "back_squat",
            &[
                (0, 80.0),
                (7, 90.0),
                (14, 100.0),
                (21, 110.0),
                (28, 110.0),
                (35, 110.0),
                (42, 110.0),
            ],
        )]))
        .unwrap();

    assert_eq!(results[0].status, PlateauStatus::Plateau);
}

#[test]
fn test_short_histories_skipped() {
    let results = PlateauDetector::new()
        .detect(&histories(&[
            ("bench_press", WEEKLY_FLAT),
            ("front_squat", &[(0, 90.0), (7, 90.0), (14, 90.0)]),
        ]))
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].exercise_name, "bench_press");
}

#[test]
fn test_last_exercises_shared_across_results() {
    let results = PlateauDetector::new()
        .detect(&histories(&[
            ("bench_press", WEEKLY_FLAT),
            ("deadlift", WEEKLY_FLAT),
            ("back_squat", &[(0, 100.0), (7, 105.0), (14, 110.0), (21, 115.0)]),
        ]))
        .unwrap();

    let names: Vec<&str> = results.iter().map(|r| r.exercise_name.as_str()).collect();
    assert_eq!(names, vec!["back_squat", "bench_press", "deadlift"]);

    for result in &results {
        let flagged: Vec<&str> = result.last_exercises.iter().map(String::as_str).collect();
        assert_eq!(flagged, vec!["bench_press", "deadlift"]);
    }
}

#[test]
fn test_window_override_and_validation() {
    let detector = PlateauDetector::with_config(PlateauConfig {
        window_size: 2,
        ..PlateauConfig::default()
    });
    let results = detector
        .detect(&histories(&[("front_squat", &[(0, 90.0), (7, 95.0), (14, 95.0)])]))
        .unwrap();
    assert_eq!(results[0].status, PlateauStatus::Plateau);

    let error = detector
        .detect_with_window(&histories(&[("bench_press", WEEKLY_FLAT)]), 1)
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_empty_histories() {
    let results = PlateauDetector::new()
        .detect(&HistoryByExercise::new())
        .unwrap();
    assert!(results.is_empty());
}
