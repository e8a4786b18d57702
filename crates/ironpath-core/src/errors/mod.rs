// ABOUTME: Unified error type and error codes shared by every IronPath crate
// ABOUTME: Maps analytic failure conditions to stable codes, HTTP statuses, and user-facing text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the engine returns [`AppResult`]. Callers branch on
//! [`AppError::code`] to degrade gracefully: `InsufficientData` hides forecast
//! charts, `NoActiveProgram` shows an "initiate a program first" state.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Malformed reps, weight, target, or window parameters
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Fewer than two usable history points for a trend fit
    #[serde(rename = "INSUFFICIENT_DATA")]
    InsufficientData = 3004,

    // Resource Management (4000-4999)
    /// Requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// A concurrent writer replaced the resource first
    #[serde(rename = "RESOURCE_LOCKED")]
    ResourceLocked = 4002,
    /// Prescription requested for an athlete without a program
    #[serde(rename = "NO_ACTIVE_PROGRAM")]
    NoActiveProgram = 4004,

    // Configuration (6000-6999)
    /// Configuration values failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Store access failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code a caller should surface for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ResourceNotFound => 404,
            Self::ResourceLocked => 409,
            Self::InsufficientData | Self::NoActiveProgram => 422,
            Self::ConfigInvalid
            | Self::InternalError
            | Self::StorageError
            | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InsufficientData => "Not enough data to forecast",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceLocked => "The resource was modified concurrently",
            Self::NoActiveProgram => "Initiate a program first",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether callers are expected to degrade the UI instead of failing the request
    #[must_use]
    pub const fn is_degradable(self) -> bool {
        matches!(self, Self::InsufficientData | Self::NoActiveProgram)
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Athlete the failing operation was scoped to
    pub athlete_id: Option<Uuid>,
    /// Resource ID if applicable (exercise name, template id)
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            athlete_id: None,
            resource_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add an athlete ID to the error context
    #[must_use]
    pub fn with_athlete_id(mut self, athlete_id: Uuid) -> Self {
        self.context.athlete_id = Some(athlete_id);
        self
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Too few history points for a trend
    pub fn insufficient_data(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InsufficientData, message)
    }

    /// No program exists for the athlete
    #[must_use]
    pub fn no_active_program(athlete_id: Uuid) -> Self {
        Self::new(
            ErrorCode::NoActiveProgram,
            format!("No active periodized program for athlete {athlete_id}"),
        )
        .with_athlete_id(athlete_id)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Concurrent write lost the race
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceLocked, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Error response shape for callers that serialize failures
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            code: error.code,
            message: error.message,
            details: error.context.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::ResourceLocked.http_status(), 409);
        assert_eq!(ErrorCode::InsufficientData.http_status(), 422);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_degradable_codes() {
        assert!(ErrorCode::InsufficientData.is_degradable());
        assert!(ErrorCode::NoActiveProgram.is_degradable());
        assert!(!ErrorCode::InvalidInput.is_degradable());
    }

    #[test]
    fn test_no_active_program_carries_athlete() {
        let athlete = Uuid::new_v4();
        let error = AppError::no_active_program(athlete);

        assert_eq!(error.code, ErrorCode::NoActiveProgram);
        assert_eq!(error.context.athlete_id, Some(athlete));
        assert!(error.to_string().starts_with("Initiate a program first"));
    }

    #[test]
    fn test_error_response_conversion() {
        let response: ErrorResponse = AppError::invalid_input("reps must be >= 1")
            .with_details(serde_json::json!({ "reps": 0 }))
            .into();

        assert_eq!(response.code, ErrorCode::InvalidInput);
        assert_eq!(response.details["reps"], 0);
    }
}
