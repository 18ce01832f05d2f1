// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses PIERRE_HEALTH_* variables into typed settings with safe fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! There are no configuration files. Every setting comes from a process
//! environment variable and falls back to a development default when unset.
//! Scoring weights and thresholds are compile-time constants and cannot be
//! changed here.

use crate::formatters::OutputFormat;
use pierre_health_core::constants::env_config;
use pierre_health_core::errors::{AppError, AppResult};
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
    /// Informational events
    #[default]
    Info,
    /// Per-assessment scoring detail
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

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    /// Lowercase name accepted by `EnvFilter`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
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
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
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

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }

    /// Lowercase environment name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Minimum log level for this crate's events
    pub log_level: LogLevel,
    /// Default CLI output format
    pub output_format: OutputFormat,
    /// Reject unrecognized categorical answers instead of applying defaults
    pub strict_validation: bool,
}

impl AppConfig {
    /// Load configuration from `PIERRE_HEALTH_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `PIERRE_HEALTH_STRICT_VALIDATION` is set
    /// to something other than a boolean.
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(env_config::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();
        let log_level = env::var(env_config::LOG_LEVEL)
            .map(|v| LogLevel::from_str_or_default(&v))
            .unwrap_or_default();
        let output_format = env::var(env_config::OUTPUT_FORMAT)
            .map(|v| OutputFormat::from_str_param(&v))
            .unwrap_or_default();
        let strict_validation = match env::var(env_config::STRICT_VALIDATION) {
            Ok(value) => parse_bool(env_config::STRICT_VALIDATION, &value)?,
            Err(_) => false,
        };

        Ok(Self {
            environment,
            log_level,
            output_format,
            strict_validation,
        })
    }

    /// Emit the effective configuration as a structured event
    ///
    /// Call after the tracing subscriber is installed.
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            log_level = %self.log_level,
            output_format = %self.output_format,
            strict_validation = self.strict_validation,
            "Loaded configuration from environment"
        );
    }
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::config(format!("Invalid {key} value: {other}")).with_field(key)),
    }
}
