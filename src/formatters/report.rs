// ABOUTME: Assessment report assembled from any AssessmentView for display and export
// ABOUTME: Adds BMI and blood pressure categories and splits recommendations into paragraphs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::TextRender;
use chrono::{DateTime, Utc};
use pierre_health_core::models::{AssessmentView, RiskLevel};
use pierre_health_intelligence::{BloodPressureCategory, BmiCategory};
use serde::Serialize;
use uuid::Uuid;

/// Display-ready result of one assessment
///
/// Built the same way for persisted and guest assessments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    /// Owning user, absent for guests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
    /// Whether the result lives only in session state
    pub guest: bool,
    /// Submission time
    pub created_at: DateTime<Utc>,
    /// BMI rounded to two decimals
    pub bmi: Option<f64>,
    /// BMI category
    pub bmi_category: BmiCategory,
    /// Systolic reading
    pub systolic_bp: u16,
    /// Diastolic reading
    pub diastolic_bp: u16,
    /// Blood pressure category
    pub blood_pressure_category: BloodPressureCategory,
    /// Weighted overall score
    pub overall_risk_score: u8,
    /// Bucket of the overall score
    pub risk_level: RiskLevel,
    /// Cardiovascular sub-score
    pub cardiovascular_risk: u8,
    /// Diabetes sub-score
    pub diabetes_risk: u8,
    /// Lifestyle sub-score
    pub lifestyle_risk: u8,
    /// Recommendation paragraphs in generated order
    pub recommendations: Vec<String>,
}

impl AssessmentReport {
    /// Build a report from a persisted or guest assessment
    #[must_use]
    pub fn from_view(view: &dyn AssessmentView) -> Self {
        let input = view.input();
        let scores = view.scores();
        Self {
            owner_id: view.owner_id(),
            guest: view.is_guest(),
            created_at: view.created_at(),
            bmi: scores.bmi,
            bmi_category: BmiCategory::from_bmi(scores.bmi),
            systolic_bp: input.systolic_bp,
            diastolic_bp: input.diastolic_bp,
            blood_pressure_category: BloodPressureCategory::from_readings(
                input.systolic_bp,
                input.diastolic_bp,
            ),
            overall_risk_score: scores.overall_risk_score,
            risk_level: scores.risk_level,
            cardiovascular_risk: scores.cardiovascular_risk,
            diabetes_risk: scores.diabetes_risk,
            lifestyle_risk: scores.lifestyle_risk,
            recommendations: scores
                .recommendation_blocks()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl TextRender for AssessmentReport {
    fn render_text(&self) -> String {
        let owner = self
            .owner_id
            .map_or_else(|| "guest".to_owned(), |id| id.to_string());
        let bmi = self
            .bmi
            .map_or_else(|| "n/a".to_owned(), |value| format!("{value:.2}"));

        let mut lines = vec![
            format!(
                "Health Risk Assessment ({})",
                self.created_at.format("%Y-%m-%d %H:%M UTC")
            ),
            format!("Owner: {owner}"),
            format!("BMI: {bmi} ({})", self.bmi_category),
            format!(
                "Blood pressure: {}/{} mmHg ({})",
                self.systolic_bp, self.diastolic_bp, self.blood_pressure_category
            ),
            format!(
                "Overall risk: {}/100 ({})",
                self.overall_risk_score,
                self.risk_level.display_label()
            ),
            format!("  Cardiovascular: {}", self.cardiovascular_risk),
            format!("  Diabetes: {}", self.diabetes_risk),
            format!("  Lifestyle: {}", self.lifestyle_risk),
            String::new(),
            "Recommendations:".to_owned(),
        ];
        lines.extend(
            self.recommendations
                .iter()
                .map(|recommendation| format!("- {recommendation}")),
        );

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}
