// ABOUTME: Shared assessment fixtures for integration tests
// ABOUTME: Healthy, high-risk, and maximal-risk inputs with known expected scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, missing_docs)]

use chrono::NaiveDate;
use pierre_health_risk::models::{
    ActivityLevel, AlcoholConsumption, AssessmentInput, MedicalHistory, QualityRating,
    SmokingStatus, StressLevel,
};

/// Reference date used for age calculations in tests
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// BMI 22.86, normal blood pressure, best answer on every lifestyle question
pub fn healthy_input() -> AssessmentInput {
    AssessmentInput {
        height_cm: Some(175.0),
        weight_kg: Some(70.0),
        systolic_bp: 115,
        diastolic_bp: 75,
        activity_level: ActivityLevel::VeryActive,
        smoking_status: SmokingStatus::Never,
        alcohol_consumption: AlcoholConsumption::Abstinent,
        diet_quality: QualityRating::Excellent,
        sleep_quality: QualityRating::Excellent,
        stress_level: StressLevel::Low,
        ..AssessmentInput::default()
    }
}

/// Scores 92 / 93 / 90 with a 1950 birth date as of [`reference_date`]
pub fn high_risk_input() -> AssessmentInput {
    AssessmentInput {
        height_cm: Some(170.0),
        weight_kg: Some(100.0),
        waist_cm: Some(110.0),
        systolic_bp: 150,
        diastolic_bp: 95,
        blood_sugar: Some(130.0),
        cholesterol_total: Some(250),
        cholesterol_hdl: Some(35),
        activity_level: ActivityLevel::Sedentary,
        smoking_status: SmokingStatus::Heavy,
        alcohol_consumption: AlcoholConsumption::Heavy,
        diet_quality: QualityRating::Poor,
        sleep_quality: QualityRating::Poor,
        stress_level: StressLevel::VeryHigh,
        medical_history: all_history(),
        date_of_birth: NaiveDate::from_ymd_opt(1950, 1, 1),
        ..AssessmentInput::default()
    }
}

/// Every contribution at its highest tier
pub fn maximal_input() -> AssessmentInput {
    AssessmentInput {
        height_cm: Some(150.0),
        weight_kg: Some(101.25),
        waist_cm: Some(120.0),
        systolic_bp: 185,
        diastolic_bp: 125,
        blood_sugar: Some(200.0),
        cholesterol_total: Some(300),
        cholesterol_hdl: Some(30),
        activity_level: ActivityLevel::Sedentary,
        smoking_status: SmokingStatus::Heavy,
        alcohol_consumption: AlcoholConsumption::Heavy,
        diet_quality: QualityRating::Poor,
        sleep_quality: QualityRating::Poor,
        stress_level: StressLevel::VeryHigh,
        medical_history: all_history(),
        date_of_birth: NaiveDate::from_ymd_opt(1940, 1, 1),
        ..AssessmentInput::default()
    }
}

pub fn all_history() -> MedicalHistory {
    MedicalHistory {
        has_diabetes: true,
        has_hypertension: true,
        has_heart_disease: true,
        family_history_heart: true,
        family_history_diabetes: true,
        family_history_cancer: true,
    }
}
