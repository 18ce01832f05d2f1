// ABOUTME: Core types and constants for the Pierre health risk assessment platform
// ABOUTME: Foundation crate with error handling, scoring constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Health Core
//!
//! Foundation crate providing shared types and constants for health risk
//! assessment. It changes rarely, so the scoring and application crates
//! build on top of it without pulling in each other.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Fixed scoring tables, thresholds, and input ranges
//! - **models**: Assessment input, scores, risk levels, goals, and profiles

/// Unified error handling system with standard error codes
pub mod errors;

/// Scoring policy constants and validation ranges organized by domain
pub mod constants;

/// Core data models (assessments, lifestyle factors, goals, profiles)
pub mod models;
