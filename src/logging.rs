// ABOUTME: Logging configuration and structured logging setup for the health risk tools
// ABOUTME: Builds a tracing subscriber writing JSON, pretty, or compact events to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging setup
//!
//! Events always go to stderr so that command output on stdout stays
//! machine-readable.

use crate::config::{Environment, LogLevel};
use anyhow::{anyhow, Result};
use pierre_health_core::constants::{env_config, service_names};
use pierre_health_core::models::RiskLevel;
use std::env;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment; production turns on location and thread fields
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terse terminal output
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to `Pretty`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default().as_str().to_owned(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: service_names::PIERRE_HEALTH_RISK.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| LogLevel::default().as_str().into());
        let format = env::var("LOG_FORMAT")
            .map(|v| LogFormat::from_str_or_default(&v))
            .unwrap_or(LogFormat::Pretty);
        let environment = env::var(env_config::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();
        let is_production = environment.is_production();

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::PIERRE_HEALTH_RISK.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Override the level directive
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        level.as_str().clone_into(&mut self.level);
        self
    }

    /// Use the application's environment; production always includes
    /// source locations and thread details
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        if environment.is_production() {
            self.include_location = true;
            self.include_thread = true;
        }
        self
    }

    /// Build the filter: a bare level applies to this workspace with other
    /// crates held at warn, a full directive string is used as given
    fn env_filter(&self) -> EnvFilter {
        if self.level.parse::<LevelFilter>().is_err() {
            return EnvFilter::new(&self.level);
        }
        let mut filter = EnvFilter::new("warn");
        for target in [
            "pierre_health_risk",
            "pierre_health_core",
            "pierre_health_intelligence",
            "pierre_health_cli",
        ] {
            if let Ok(directive) = format!("{target}={}", self.level).parse() {
                filter = filter.add_directive(directive);
            }
        }
        filter
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Pierre health risk tools starting up"
        );
    }
}

/// Domain-specific structured log events
pub struct AppLogger;

impl AppLogger {
    /// Log a completed assessment submission
    pub fn log_assessment_scored(
        assessment_id: Uuid,
        user_id: Option<Uuid>,
        overall_risk_score: u8,
        risk_level: RiskLevel,
    ) {
        info!(
            assessment.id = %assessment_id,
            user.id = %user_id.map_or_else(|| "guest".to_owned(), |id| id.to_string()),
            assessment.overall = overall_risk_score,
            assessment.level = %risk_level,
            "Assessment scored"
        );
    }

    /// Log input rejected before scoring
    pub fn log_validation_rejected(field: Option<&str>, reason: &str) {
        warn!(
            validation.field = field.unwrap_or("unknown"),
            validation.reason = %reason,
            "Assessment input rejected"
        );
    }

    /// Log a goal save, with whether progress was re-derived
    pub fn log_goal_saved(goal_id: Uuid, user_id: Uuid, progress: u8, derived: bool) {
        info!(
            goal.id = %goal_id,
            user.id = %user_id,
            goal.progress = progress,
            goal.derived = derived,
            "Goal saved"
        );
    }
}
