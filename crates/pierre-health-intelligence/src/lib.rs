// ABOUTME: Health risk scoring engine: sub-scores, overall level, recommendations, goal progress
// ABOUTME: Pure computation over pierre-health-core models with no I/O or shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Health Intelligence
//!
//! Two independent, stateless components:
//!
//! - [`RiskEngine`]: assessment measurements to BMI, cardiovascular,
//!   diabetes and lifestyle sub-scores, a weighted overall score, its risk
//!   level, and recommendation text
//! - [`GoalProgressCalculator`]: free-text goal values to a 0-100 progress
//!   percentage

/// BMI, blood pressure category, and age helpers
pub mod categories;

/// Goal progress derivation
pub mod goal_progress;

/// Recommendation paragraphs and their triggers
pub mod recommendations;

/// Risk engine combining the sub-scores
pub mod risk_engine;

/// Cardiovascular, diabetes, and lifestyle sub-scores
pub mod risk_scores;

pub use categories::{
    calculate_age, calculate_bmi, round_decimal, BloodPressureCategory, BmiCategory,
};
pub use goal_progress::GoalProgressCalculator;
pub use recommendations::{
    generate_recommendations, join_recommendations, split_recommendations, Recommendation,
};
pub use risk_engine::{overall_score, RiskEngine, RiskScorer};
pub use risk_scores::{cardiovascular_risk, diabetes_risk, lifestyle_risk};
