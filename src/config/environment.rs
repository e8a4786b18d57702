// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses deployment mode, log level, and intelligence overrides from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration: there is no config file to read.

use ironpath_core::errors::AppResult;
use ironpath_intelligence::config::IntelligenceConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operation
    #[default]
    Info,
    /// Per-computation detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime configuration for the engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
}

/// Full configuration: runtime settings plus algorithm thresholds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Runtime settings
    pub server: ServerConfig,
    /// Algorithm thresholds
    pub intelligence: IntelligenceConfig,
}

impl ServerConfig {
    /// Load runtime settings from `ENVIRONMENT` and `RUST_LOG`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load runtime settings using `lookup` as the variable source
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            environment: lookup("ENVIRONMENT")
                .map_or_else(Environment::default, |v| Environment::from_str_or_default(&v)),
            log_level: lookup("RUST_LOG")
                .map_or_else(LogLevel::default, |v| LogLevel::from_str_or_default(&v)),
        }
    }
}

impl EngineConfig {
    /// Load and validate the full configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if an intelligence override fails to parse or validate
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load and validate the full configuration using `lookup` as the variable source
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if an intelligence override fails to parse or validate
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let server = ServerConfig::from_lookup(&lookup);
        let intelligence = IntelligenceConfig::load_with(&lookup)?;

        info!(
            environment = %server.environment,
            log_level = %server.log_level,
            plateau_window = intelligence.plateau.window_size,
            rounding_increment_kg = intelligence.periodization.rounding_increment_kg,
            "Configuration loaded"
        );

        Ok(Self {
            server,
            intelligence,
        })
    }
}
