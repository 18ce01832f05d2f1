// ABOUTME: Health assessment input snapshot, derived scores, and risk level models
// ABOUTME: AssessmentInput feeds the risk engine; AssessmentScores holds everything it derives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lifestyle::{
    ActivityLevel, AlcoholConsumption, DietQuality, SleepQuality, SmokingStatus, StressLevel,
};
use crate::constants::{risk_levels, RECOMMENDATION_SEPARATOR};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Personal and family medical history flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalHistory {
    /// Diagnosed with diabetes
    pub has_diabetes: bool,
    /// Diagnosed with hypertension
    pub has_hypertension: bool,
    /// Diagnosed with heart disease
    pub has_heart_disease: bool,
    /// Heart disease in the immediate family
    pub family_history_heart: bool,
    /// Diabetes in the immediate family
    pub family_history_diabetes: bool,
    /// Cancer in the immediate family (collected, not scored)
    pub family_history_cancer: bool,
}

/// Measurements and answers submitted for one assessment
///
/// Height and weight are required by the submission flow; they are modelled
/// as optional so that an incomplete snapshot still scores (with BMI
/// contributions skipped) instead of failing. Blood work is optional and an
/// absent value never counts as zero.
///
/// # Examples
///
/// ```rust
/// use pierre_health_core::models::{AssessmentInput, SmokingStatus};
///
/// let input = AssessmentInput {
///     height_cm: Some(175.0),
///     weight_kg: Some(70.0),
///     systolic_bp: 118,
///     diastolic_bp: 76,
///     smoking_status: SmokingStatus::Never,
///     ..AssessmentInput::default()
/// };
/// assert!(input.blood_sugar.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Waist circumference in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Systolic blood pressure (mmHg)
    pub systolic_bp: u16,
    /// Diastolic blood pressure (mmHg)
    pub diastolic_bp: u16,
    /// Resting heart rate (bpm), collected but not scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u16>,
    /// Fasting blood sugar (mg/dL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_sugar: Option<f64>,
    /// Total cholesterol (mg/dL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cholesterol_total: Option<u16>,
    /// HDL cholesterol (mg/dL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cholesterol_hdl: Option<u16>,
    /// LDL cholesterol (mg/dL), collected but not scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cholesterol_ldl: Option<u16>,
    /// Physical activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Smoking habit
    #[serde(default)]
    pub smoking_status: SmokingStatus,
    /// Alcohol consumption
    #[serde(default)]
    pub alcohol_consumption: AlcoholConsumption,
    /// Diet quality
    #[serde(default)]
    pub diet_quality: DietQuality,
    /// Sleep quality
    #[serde(default)]
    pub sleep_quality: SleepQuality,
    /// Perceived stress
    #[serde(default)]
    pub stress_level: StressLevel,
    /// Medical and family history
    #[serde(flatten)]
    pub medical_history: MedicalHistory,
    /// Subject's date of birth, used only for the age contribution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

/// Categorical bucket derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Overall score below 25
    Low,
    /// Overall score 25-49
    Moderate,
    /// Overall score 50-74
    High,
    /// Overall score 75 and above
    VeryHigh,
}

impl RiskLevel {
    /// Step function over the overall score with boundaries 25, 50, 75
    #[must_use]
    pub const fn from_overall(overall: u8) -> Self {
        if overall < risk_levels::MODERATE_FROM {
            Self::Low
        } else if overall < risk_levels::HIGH_FROM {
            Self::Moderate
        } else if overall < risk_levels::VERY_HIGH_FROM {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Stored string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }

    /// Human-readable label shown with results
    #[must_use]
    pub const fn display_label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
            Self::VeryHigh => "Very High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything derived from one scoring pass
///
/// All fields are produced together; none is ever recomputed on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentScores {
    /// Body-mass index rounded to two decimals, absent without height/weight
    pub bmi: Option<f64>,
    /// Weighted overall score (0-100)
    pub overall_risk_score: u8,
    /// Bucket of the overall score
    pub risk_level: RiskLevel,
    /// Cardiovascular sub-score (0-100)
    pub cardiovascular_risk: u8,
    /// Diabetes sub-score (0-100)
    pub diabetes_risk: u8,
    /// Lifestyle and blood pressure sub-score (0-100)
    pub lifestyle_risk: u8,
    /// Recommendation paragraphs joined by a blank line
    pub recommendations: String,
}

impl AssessmentScores {
    /// Recommendation paragraphs in their generated order
    #[must_use]
    pub fn recommendation_blocks(&self) -> Vec<&str> {
        self.recommendations
            .split(RECOMMENDATION_SEPARATOR)
            .filter(|block| !block.is_empty())
            .collect()
    }
}

/// An assessment input together with the scores derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAssessment {
    /// Submitted measurements and answers
    pub input: AssessmentInput,
    /// Derived scores and recommendations
    pub scores: AssessmentScores,
}
