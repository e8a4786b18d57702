// ABOUTME: Loading of raw set logs from JSON files
// ABOUTME: Accepts either a bare array of sets or an object with a "sets" array
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ironpath_core::errors::{AppError, AppResult};
use ironpath_core::models::SetEntry;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum SetLogFile {
    Bare(Vec<SetEntry>),
    Wrapped { sets: Vec<SetEntry> },
}

/// Parse a JSON set log
///
/// # Errors
///
/// Returns `SerializationError` if the document is not a set log
pub fn parse_set_log(json: &str) -> AppResult<Vec<SetEntry>> {
    let sets = match serde_json::from_str::<SetLogFile>(json)? {
        SetLogFile::Bare(sets) | SetLogFile::Wrapped { sets } => sets,
    };
    Ok(sets)
}

/// Read and parse a JSON set log from disk
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read and `SerializationError` if it
/// does not parse
pub async fn read_set_log(path: &Path) -> AppResult<Vec<SetEntry>> {
    let contents = fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Failed to read set log {}", path.display())).with_source(e)
    })?;

    let sets = parse_set_log(&contents)?;
    debug!(path = %path.display(), count = sets.len(), "Loaded set log");
    Ok(sets)
}
