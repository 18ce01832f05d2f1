// ABOUTME: Integration tests for the health risk engine
// ABOUTME: Covers BMI, sub-scores, overall weighting, risk levels, defaults, and batch scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::{healthy_input, high_risk_input, maximal_input, reference_date};
use pierre_health_risk::intelligence::{
    calculate_bmi, overall_score, split_recommendations, Recommendation, RiskEngine, RiskScorer,
};
use pierre_health_risk::models::{AssessmentInput, RiskLevel};

fn engine() -> RiskEngine {
    RiskEngine::as_of(reference_date())
}

// ============================================================================
// BMI
// ============================================================================

#[test]
fn test_bmi_rounded_to_two_decimals() {
    let scores = engine().score(&healthy_input());
    assert_eq!(scores.bmi, Some(22.86));
}

#[test]
fn test_bmi_absent_without_height_or_weight() {
    assert_eq!(calculate_bmi(None, Some(70.0)), None);
    assert_eq!(calculate_bmi(Some(175.0), None), None);

    let input = AssessmentInput {
        height_cm: None,
        ..healthy_input()
    };
    assert_eq!(engine().score(&input).bmi, None);
}

#[test]
fn test_missing_bmi_skips_bmi_contributions() {
    let mut input = high_risk_input();
    input.height_cm = None;
    let scores = engine().score(&input);

    // 92 - 12, 93 - 18, 90 - 15
    assert_eq!(scores.cardiovascular_risk, 80);
    assert_eq!(scores.diabetes_risk, 75);
    assert_eq!(scores.lifestyle_risk, 75);
}

// ============================================================================
// Sub-scores and overall
// ============================================================================

#[test]
fn test_healthy_profile_scores_zero() {
    let scores = engine().score(&healthy_input());
    assert_eq!(scores.cardiovascular_risk, 0);
    assert_eq!(scores.diabetes_risk, 0);
    assert_eq!(scores.lifestyle_risk, 0);
    assert_eq!(scores.overall_risk_score, 0);
    assert_eq!(scores.risk_level, RiskLevel::Low);
}

#[test]
fn test_high_risk_profile_scores() {
    let scores = engine().score(&high_risk_input());
    assert!((scores.bmi.unwrap() - 34.6).abs() < 1e-9);
    assert_eq!(scores.cardiovascular_risk, 92);
    assert_eq!(scores.diabetes_risk, 93);
    assert_eq!(scores.lifestyle_risk, 90);
    // 36.8 + 27.9 + 27.0 = 91.7, truncated
    assert_eq!(scores.overall_risk_score, 91);
    assert_eq!(scores.risk_level, RiskLevel::VeryHigh);
}

#[test]
fn test_sub_scores_capped_when_everything_is_maximal() {
    let scores = engine().score(&maximal_input());
    assert_eq!(scores.cardiovascular_risk, 100);
    assert_eq!(scores.diabetes_risk, 100);
    assert_eq!(scores.lifestyle_risk, 100);
    assert_eq!(scores.overall_risk_score, 100);
    assert_eq!(scores.risk_level, RiskLevel::VeryHigh);
}

#[test]
fn test_overall_score_truncates() {
    assert_eq!(overall_score(33, 33, 34), 33);
    assert_eq!(overall_score(25, 25, 25), 25);
    assert_eq!(overall_score(0, 0, 0), 0);
    assert_eq!(overall_score(100, 100, 100), 100);
    assert_eq!(overall_score(10, 0, 0), 4);
}

#[test]
fn test_risk_level_boundaries() {
    assert_eq!(RiskLevel::from_overall(24), RiskLevel::Low);
    assert_eq!(RiskLevel::from_overall(25), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_overall(49), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_overall(50), RiskLevel::High);
    assert_eq!(RiskLevel::from_overall(74), RiskLevel::High);
    assert_eq!(RiskLevel::from_overall(75), RiskLevel::VeryHigh);
    assert_eq!(RiskLevel::VeryHigh.display_label(), "Very High Risk");
}

// ============================================================================
// Defaults and skipped contributions
// ============================================================================

#[test]
fn test_unspecified_answers_use_table_defaults() {
    let input = AssessmentInput {
        height_cm: Some(175.0),
        weight_kg: Some(70.0),
        systolic_bp: 115,
        diastolic_bp: 75,
        ..AssessmentInput::default()
    };
    let scores = engine().score(&input);

    // activity defaults to 5, smoking to 0
    assert_eq!(scores.cardiovascular_risk, 5);
    // activity 5 + diet 5
    assert_eq!(scores.diabetes_risk, 10);
    // smoking and alcohol default to 0
    assert_eq!(scores.lifestyle_risk, 0);
    assert_eq!(scores.overall_risk_score, 5);
}

#[test]
fn test_unrecognized_choice_strings_deserialize_to_defaults() {
    let input: AssessmentInput = serde_json::from_value(serde_json::json!({
        "height_cm": 175.0,
        "weight_kg": 70.0,
        "systolic_bp": 115,
        "diastolic_bp": 75,
        "activity_level": "couch_potato",
        "smoking_status": "vape",
        "diet_quality": "excellent",
        "alcohol_consumption": "none"
    }))
    .unwrap();

    let scores = engine().score(&input);
    assert_eq!(scores.cardiovascular_risk, 5);
    assert_eq!(scores.diabetes_risk, 5);
}

#[test]
fn test_age_thresholds_use_reference_date() {
    let just_under = AssessmentInput {
        date_of_birth: NaiveDate::from_ymd_opt(1960, 6, 2),
        ..healthy_input()
    };
    let exactly_65 = AssessmentInput {
        date_of_birth: NaiveDate::from_ymd_opt(1960, 6, 1),
        ..healthy_input()
    };
    assert_eq!(engine().score(&just_under).lifestyle_risk, 7);
    assert_eq!(engine().score(&exactly_65).lifestyle_risk, 10);
}

#[test]
fn test_missing_or_future_birth_date_skips_age() {
    let future = AssessmentInput {
        date_of_birth: NaiveDate::from_ymd_opt(2030, 1, 1),
        ..healthy_input()
    };
    assert_eq!(engine().score(&future).lifestyle_risk, 0);
    assert_eq!(engine().score(&healthy_input()).lifestyle_risk, 0);
}

#[test]
fn test_absent_blood_work_never_counts_as_zero_reading() {
    // An HDL of 0 would score 10 points; an absent HDL scores none
    let scores = engine().score(&healthy_input());
    assert_eq!(scores.cardiovascular_risk, 0);
}

// ============================================================================
// Recommendations and determinism
// ============================================================================

#[test]
fn test_healthy_profile_gets_single_affirmation() {
    let scores = engine().score(&healthy_input());
    assert_eq!(
        scores.recommendation_blocks(),
        vec![Recommendation::DoingWell.message()]
    );
}

#[test]
fn test_high_risk_recommendations_in_order() {
    let scores = engine().score(&high_risk_input());
    let expected: Vec<&str> = [
        Recommendation::Obese,
        Recommendation::BloodPressureElevated,
        Recommendation::BloodSugarDiabetic,
        Recommendation::CholesterolElevated,
        Recommendation::QuitSmoking,
        Recommendation::HeavyAlcohol,
        Recommendation::IncreaseActivity,
        Recommendation::ImproveDiet,
        Recommendation::ImproveSleep,
        Recommendation::ManageStress,
    ]
    .iter()
    .map(Recommendation::message)
    .collect();

    assert_eq!(split_recommendations(&scores.recommendations), expected);
}

#[test]
fn test_scoring_is_idempotent() {
    let engine = engine();
    let input = high_risk_input();
    assert_eq!(engine.score(&input), engine.score(&input));
}

#[test]
fn test_process_keeps_input_alongside_scores() {
    let input = high_risk_input();
    let scored = engine().process(&input);
    assert_eq!(scored.input, input);
    assert_eq!(scored.scores, engine().score(&input));
}

#[test]
fn test_score_batch_preserves_order() {
    let inputs = vec![healthy_input(), high_risk_input(), maximal_input()];
    let scored = engine().score_batch(&inputs);

    assert_eq!(scored.len(), 3);
    let overall: Vec<u8> = scored.iter().map(|s| s.scores.overall_risk_score).collect();
    assert_eq!(overall, vec![0, 91, 100]);
    for (result, input) in scored.iter().zip(&inputs) {
        assert_eq!(&result.input, input);
    }
}
