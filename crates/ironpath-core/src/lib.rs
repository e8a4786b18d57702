// ABOUTME: Core types and constants for the IronPath strength analytics engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # IronPath Core
//!
//! Foundation crate providing shared types and constants for the IronPath
//! strength analytics engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Set logs, history points, periodized programs, workout templates
//! - **constants**: Engine-wide defaults organized by domain

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (`SetEntry`, `ExerciseHistoryPoint`, `PeriodizedProgram`, etc.)
pub mod models;

/// Engine constants and default values organized by domain
pub mod constants;
