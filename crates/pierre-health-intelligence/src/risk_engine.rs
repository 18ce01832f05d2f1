// ABOUTME: Risk engine turning an assessment snapshot into BMI, sub-scores, level, and advice
// ABOUTME: Pure, synchronous scoring pass with a parallel batch variant for bulk re-scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health risk engine.
//!
//! One scoring pass computes BMI first, then the three sub-scores, the
//! weighted overall score, its risk level, and the recommendation text.
//! The engine holds no mutable state and is safe to share across threads.

use crate::categories::{calculate_age, calculate_bmi};
use crate::recommendations::{generate_recommendations, join_recommendations};
use crate::risk_scores::{cardiovascular_risk, diabetes_risk, lifestyle_risk};
use chrono::{NaiveDate, Utc};
use pierre_health_core::constants::scoring;
use pierre_health_core::models::{AssessmentInput, AssessmentScores, RiskLevel, ScoredAssessment};
use rayon::prelude::*;
use tracing::debug;

/// Scores assessment snapshots
pub trait RiskScorer: Send + Sync {
    /// Derive every score field for `input`
    fn score(&self, input: &AssessmentInput) -> AssessmentScores;

    /// Score `input` and return it together with its scores
    fn process(&self, input: &AssessmentInput) -> ScoredAssessment {
        ScoredAssessment {
            input: input.clone(),
            scores: self.score(input),
        }
    }
}

/// Fixed-policy health risk engine
///
/// Ages are computed against the current UTC date unless the engine was
/// built with [`RiskEngine::as_of`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEngine {
    reference_date: Option<NaiveDate>,
}

impl RiskEngine {
    /// Engine that evaluates ages as of today
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reference_date: None,
        }
    }

    /// Engine that evaluates ages as of `date`
    #[must_use]
    pub const fn as_of(date: NaiveDate) -> Self {
        Self {
            reference_date: Some(date),
        }
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Score many assessments in parallel, preserving input order
    #[must_use]
    pub fn score_batch(&self, inputs: &[AssessmentInput]) -> Vec<ScoredAssessment> {
        inputs.par_iter().map(|input| self.process(input)).collect()
    }
}

impl RiskScorer for RiskEngine {
    fn score(&self, input: &AssessmentInput) -> AssessmentScores {
        let bmi = calculate_bmi(input.height_cm, input.weight_kg);
        let age = input
            .date_of_birth
            .and_then(|birth| calculate_age(birth, self.today()));

        let cardiovascular = cardiovascular_risk(input, bmi);
        let diabetes = diabetes_risk(input, bmi);
        let lifestyle = lifestyle_risk(input, bmi, age);
        let overall = overall_score(cardiovascular, diabetes, lifestyle);
        let risk_level = RiskLevel::from_overall(overall);

        debug!(
            bmi = ?bmi,
            age = ?age,
            cardiovascular,
            diabetes,
            lifestyle,
            overall,
            risk_level = %risk_level,
            "Assessment scored"
        );

        AssessmentScores {
            bmi,
            overall_risk_score: overall,
            risk_level,
            cardiovascular_risk: cardiovascular,
            diabetes_risk: diabetes,
            lifestyle_risk: lifestyle,
            recommendations: join_recommendations(&generate_recommendations(input, bmi)),
        }
    }
}

/// Weighted overall score, truncated toward zero
///
/// Terms are summed left to right without fused multiply-add so that scores
/// sitting exactly on a level boundary truncate the same way everywhere.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn overall_score(cardiovascular: u8, diabetes: u8, lifestyle: u8) -> u8 {
    let weighted = f64::from(cardiovascular) * scoring::CARDIOVASCULAR_WEIGHT
        + f64::from(diabetes) * scoring::DIABETES_WEIGHT
        + f64::from(lifestyle) * scoring::LIFESTYLE_WEIGHT;
    weighted.clamp(0.0, f64::from(scoring::MAX_SCORE)) as u8
}
