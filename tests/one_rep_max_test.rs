// ABOUTME: Integration tests for Epley 1RM estimation and session aggregation
// ABOUTME: Validates single-rep identity, monotonicity, input rejection, and per-session maxima
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{day, single_sets};
use ironpath_core::errors::ErrorCode;
use ironpath_core::models::SetEntry;
use ironpath_intelligence::OneRepMaxEstimator;

#[test]
fn test_single_rep_returns_weight() {
    for weight in [0.0, 20.0, 142.5, 300.0] {
        let estimate = OneRepMaxEstimator::estimate(1, weight).unwrap();
        assert!((estimate - weight).abs() < f64::EPSILON);
    }
}

#[test]
fn test_epley_formula() {
    // 100 kg x 5 -> 100 * (1 + 5/30)
    let estimate = OneRepMaxEstimator::estimate(5, 100.0).unwrap();
    assert!((estimate - 116.666_666_666_7).abs() < 1e-6);

    let estimate = OneRepMaxEstimator::estimate(10, 60.0).unwrap();
    assert!((estimate - 80.0).abs() < 1e-9);
}

#[test]
fn test_estimate_monotonic_in_reps_and_weight() {
    let mut previous = 0.0;
    for reps in 1..=20 {
        let estimate = OneRepMaxEstimator::estimate(reps, 100.0).unwrap();
        assert!(estimate >= previous, "reps {reps} lowered the estimate");
        previous = estimate;
    }

    let mut previous = 0.0;
    for weight in (0..=200).step_by(5) {
        let estimate = OneRepMaxEstimator::estimate(5, f64::from(weight)).unwrap();
        assert!(estimate >= previous);
        previous = estimate;
    }
}

#[test]
fn test_invalid_sets_rejected() {
    let zero_reps = OneRepMaxEstimator::estimate(0, 100.0).unwrap_err();
    assert_eq!(zero_reps.code, ErrorCode::InvalidInput);

    let negative = OneRepMaxEstimator::estimate(5, -2.5).unwrap_err();
    assert_eq!(negative.code, ErrorCode::InvalidInput);

    let not_a_number = OneRepMaxEstimator::estimate(3, f64::NAN).unwrap_err();
    assert_eq!(not_a_number.code, ErrorCode::InvalidInput);
}

#[test]
fn test_session_takes_heaviest_effective_set() {
    let session = day(0);
    let sets = vec![
        SetEntry::new("bench_press", 8, 80.0, session),
        SetEntry::new("bench_press", 3, 95.0, session + Duration::minutes(10)),
        SetEntry::new("bench_press", 1, 100.0, session + Duration::minutes(20)),
    ];

    let history = OneRepMaxEstimator::build_history(&sets).unwrap();
    let points = &history["bench_press"];

    assert_eq!(points.len(), 1);
    // 95 x 3 (104.5) beats 80 x 8 (101.3) and 100 x 1
    assert!((points[0].estimated_1rm - 104.5).abs() < 1e-9);
    assert_eq!(points[0].date, session);
}

#[test]
fn test_session_past_midnight_stays_one_session() {
    // 23:40 and 00:15 the next calendar day
    let late = day(0) + Duration::hours(14) + Duration::minutes(40);
    let sets = vec![
        SetEntry::new("back_squat", 5, 100.0, late),
        SetEntry::new("back_squat", 3, 110.0, late + Duration::minutes(35)),
    ];

    let history = OneRepMaxEstimator::build_history(&sets).unwrap();
    let points = &history["back_squat"];

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].date, late);
    // 110 x 3 -> 121 beats 100 x 5 -> 116.7
    assert!((points[0].estimated_1rm - 121.0).abs() < 1e-9);
}

#[test]
fn test_long_gap_same_day_splits_sessions() {
    let morning = day(0);
    let sets = vec![
        SetEntry::new("back_squat", 1, 100.0, morning + Duration::hours(9)),
        SetEntry::new("back_squat", 1, 95.0, morning),
    ];

    let history = OneRepMaxEstimator::build_history(&sets).unwrap();
    let points = &history["back_squat"];

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, morning);
    assert!((points[0].estimated_1rm - 95.0).abs() < f64::EPSILON);
    assert!((points[1].estimated_1rm - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_history_split_by_exercise_and_day() {
    let mut sets = single_sets("deadlift", &[(7, 180.0), (0, 170.0)]);
    sets.extend(single_sets("back_squat", &[(0, 140.0)]));

    let history = OneRepMaxEstimator::build_history(&sets).unwrap();

    assert_eq!(history.len(), 2);
    let deadlift = &history["deadlift"];
    assert_eq!(deadlift.len(), 2);
    assert!(deadlift[0].date < deadlift[1].date);
    assert!((deadlift[0].estimated_1rm - 170.0).abs() < f64::EPSILON);
}

#[test]
fn test_one_bad_set_rejects_batch() {
    let mut sets = single_sets("deadlift", &[(0, 170.0), (7, 175.0)]);
    sets.push(SetEntry::new("deadlift", 0, 100.0, day(14)));

    let error = OneRepMaxEstimator::build_history(&sets).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.context.resource_id.as_deref(), Some("deadlift"));
}
