// ABOUTME: Personalised health recommendations triggered by raw assessment measurements
// ABOUTME: Ordered, independent paragraphs with a single affirmation when nothing triggers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation generation.
//!
//! Triggers look at the submitted measurements, never at the derived
//! scores. They are evaluated in a fixed order and each produces at most
//! one paragraph. Stored text joins paragraphs with a blank line.

use pierre_health_core::constants::{
    blood_pressure, blood_sugar, bmi, cholesterol, RECOMMENDATION_SEPARATOR,
};
use pierre_health_core::models::{AlcoholConsumption, AssessmentInput, SmokingStatus};
use serde::{Deserialize, Serialize};

/// One recommendation paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// BMI below 18.5
    Underweight,
    /// BMI from 25 to below 30
    Overweight,
    /// BMI 30 and above
    Obese,
    /// Systolic ≥ 140 or diastolic ≥ 90
    BloodPressureElevated,
    /// Systolic ≥ 130
    BloodPressureSlightlyElevated,
    /// Fasting blood sugar ≥ 126
    BloodSugarDiabetic,
    /// Fasting blood sugar ≥ 100
    BloodSugarPreDiabetic,
    /// Total cholesterol ≥ 200
    CholesterolElevated,
    /// Regular or heavy smoker
    QuitSmoking,
    /// Occasional smoker
    OccasionalSmoking,
    /// Heavy alcohol consumption
    HeavyAlcohol,
    /// Sedentary or light activity
    IncreaseActivity,
    /// Poor or fair diet
    ImproveDiet,
    /// Poor or fair sleep
    ImproveSleep,
    /// High or very high stress
    ManageStress,
    /// Nothing triggered
    DoingWell,
}

impl Recommendation {
    /// Paragraph text
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Underweight => {
                "Your BMI indicates you are underweight. Consider consulting a nutritionist \
                 to develop a healthy weight gain plan with balanced nutrition."
            }
            Self::Overweight => {
                "Your BMI indicates you are overweight. Aim to lose 5-10% of your body weight \
                 through a combination of healthy eating and regular exercise."
            }
            Self::Obese => {
                "Your BMI indicates obesity. We strongly recommend consulting with a healthcare \
                 provider to develop a comprehensive weight management plan."
            }
            Self::BloodPressureElevated => {
                "Your blood pressure is elevated. Reduce sodium intake, exercise regularly, \
                 manage stress, and consult your doctor about medication if needed."
            }
            Self::BloodPressureSlightlyElevated => {
                "Your blood pressure is slightly elevated. Monitor it regularly and consider \
                 lifestyle modifications like reducing salt and increasing physical activity."
            }
            Self::BloodSugarDiabetic => {
                "Your fasting blood sugar is in the diabetic range. Please consult a healthcare \
                 provider immediately for proper diagnosis and treatment."
            }
            Self::BloodSugarPreDiabetic => {
                "Your fasting blood sugar indicates pre-diabetes. Focus on weight management, \
                 reduce sugar intake, and increase physical activity to prevent progression."
            }
            Self::CholesterolElevated => {
                "Your total cholesterol is elevated. Reduce saturated fats, increase fiber intake, \
                 exercise regularly, and consider consulting your doctor about treatment options."
            }
            Self::QuitSmoking => {
                "Quitting smoking is one of the best things you can do for your health. \
                 Consider nicotine replacement therapy, counseling, or medication to help quit."
            }
            Self::OccasionalSmoking => {
                "Even occasional smoking increases health risks. Consider quitting completely \
                 to significantly reduce your risk of heart disease and cancer."
            }
            Self::HeavyAlcohol => {
                "Heavy alcohol consumption increases health risks. Consider reducing intake \
                 to moderate levels (1 drink/day for women, 2 for men) or abstaining."
            }
            Self::IncreaseActivity => {
                "Increase your physical activity. Aim for at least 150 minutes of moderate \
                 aerobic activity or 75 minutes of vigorous activity per week."
            }
            Self::ImproveDiet => {
                "Improve your diet by eating more fruits, vegetables, whole grains, and lean proteins. \
                 Reduce processed foods, sugary drinks, and excessive salt."
            }
            Self::ImproveSleep => {
                "Improve your sleep habits. Aim for 7-9 hours of quality sleep per night. \
                 Maintain a consistent sleep schedule and create a relaxing bedtime routine."
            }
            Self::ManageStress => {
                "High stress levels can impact your health. Consider stress management techniques \
                 like meditation, deep breathing, yoga, or speaking with a mental health professional."
            }
            Self::DoingWell => {
                "Great job! Your health indicators look good. Continue maintaining your healthy \
                 lifestyle with regular exercise, balanced nutrition, and routine health check-ups."
            }
        }
    }
}

/// Recommendations triggered by `input`, in display order
///
/// Never empty: when no trigger fires the result is `[DoingWell]`.
#[must_use]
pub fn generate_recommendations(
    input: &AssessmentInput,
    bmi_value: Option<f64>,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if let Some(value) = bmi_value {
        if value < bmi::UNDERWEIGHT_BELOW {
            recommendations.push(Recommendation::Underweight);
        } else if (bmi::OVERWEIGHT_FROM..bmi::OBESE_FROM).contains(&value) {
            recommendations.push(Recommendation::Overweight);
        } else if value >= bmi::OBESE_FROM {
            recommendations.push(Recommendation::Obese);
        }
    }

    if input.systolic_bp >= blood_pressure::STAGE_2_SYSTOLIC
        || input.diastolic_bp >= blood_pressure::STAGE_2_DIASTOLIC
    {
        recommendations.push(Recommendation::BloodPressureElevated);
    } else if input.systolic_bp >= blood_pressure::STAGE_1_SYSTOLIC {
        recommendations.push(Recommendation::BloodPressureSlightlyElevated);
    }

    if let Some(sugar) = input.blood_sugar {
        if sugar >= blood_sugar::DIABETIC_FROM {
            recommendations.push(Recommendation::BloodSugarDiabetic);
        } else if sugar >= blood_sugar::PRE_DIABETIC_FROM {
            recommendations.push(Recommendation::BloodSugarPreDiabetic);
        }
    }

    if input
        .cholesterol_total
        .is_some_and(|total| total >= cholesterol::TOTAL_BORDERLINE_FROM)
    {
        recommendations.push(Recommendation::CholesterolElevated);
    }

    match input.smoking_status {
        SmokingStatus::Regular | SmokingStatus::Heavy => {
            recommendations.push(Recommendation::QuitSmoking);
        }
        SmokingStatus::Occasional => recommendations.push(Recommendation::OccasionalSmoking),
        SmokingStatus::Never | SmokingStatus::Former | SmokingStatus::Unspecified => {}
    }

    if input.alcohol_consumption == AlcoholConsumption::Heavy {
        recommendations.push(Recommendation::HeavyAlcohol);
    }
    if input.activity_level.is_low() {
        recommendations.push(Recommendation::IncreaseActivity);
    }
    if input.diet_quality.needs_improvement() {
        recommendations.push(Recommendation::ImproveDiet);
    }
    if input.sleep_quality.needs_improvement() {
        recommendations.push(Recommendation::ImproveSleep);
    }
    if input.stress_level.is_elevated() {
        recommendations.push(Recommendation::ManageStress);
    }

    if recommendations.is_empty() {
        recommendations.push(Recommendation::DoingWell);
    }
    recommendations
}

/// Join paragraphs into the stored text form
#[must_use]
pub fn join_recommendations(recommendations: &[Recommendation]) -> String {
    recommendations
        .iter()
        .map(Recommendation::message)
        .collect::<Vec<_>>()
        .join(RECOMMENDATION_SEPARATOR)
}

/// Split stored text back into its paragraphs
#[must_use]
pub fn split_recommendations(text: &str) -> Vec<&str> {
    text.split(RECOMMENDATION_SEPARATOR)
        .filter(|block| !block.is_empty())
        .collect()
}
