// ABOUTME: Main library entry point for the Pierre health risk application layer
// ABOUTME: Wires configuration, logging, validation, services, and formatters around the engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Health Risk
//!
//! Personal health risk self-assessment: a user submits body measurements,
//! lab values and lifestyle answers, and receives cardiovascular, diabetes
//! and lifestyle sub-scores, a weighted overall score with its risk level,
//! and plain-language recommendations. Health goals with free-text target
//! and current values get a derived completion percentage.
//!
//! ## Architecture
//!
//! - **`pierre-health-core`**: errors, constants, and domain models
//! - **`pierre-health-intelligence`**: the pure scoring and progress engines
//! - **this crate**: environment configuration, logging, input validation,
//!   submission services, and output formatting
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_health_risk::models::AssessmentInput;
//! use pierre_health_risk::services::AssessmentService;
//!
//! let service = AssessmentService::new();
//! let input = AssessmentInput {
//!     height_cm: Some(175.0),
//!     weight_kg: Some(70.0),
//!     systolic_bp: 118,
//!     diastolic_bp: 76,
//!     ..AssessmentInput::default()
//! };
//! if let Ok(result) = service.submit_guest(input, None) {
//!     println!("overall risk: {}", result.assessment.scores.overall_risk_score);
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// JSON input documents read from disk
pub mod documents;

/// Output formats and display reports
pub mod formatters;

/// Tracing subscriber setup and domain log events
pub mod logging;

/// Assessment and goal services
pub mod services;

/// Input validation ahead of scoring
pub mod validation;

pub use pierre_health_core::{constants, errors, models};
pub use pierre_health_intelligence as intelligence;
