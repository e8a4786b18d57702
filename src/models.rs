// ABOUTME: Re-export of domain models from ironpath-core
// ABOUTME: Set logs, history points, programs, and workout templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ironpath_core::models::*;
