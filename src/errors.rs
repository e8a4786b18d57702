// ABOUTME: Re-export of the unified error types from ironpath-core
// ABOUTME: Lets service and binary code import errors from the root crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ironpath_core::errors::*;
