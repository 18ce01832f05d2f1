// ABOUTME: Configuration module entry point for the health risk application layer
// ABOUTME: Environment-only settings: deployment mode, log level, output format, validation mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management

/// Environment variable driven configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};
