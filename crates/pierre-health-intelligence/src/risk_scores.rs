// ABOUTME: Cardiovascular, diabetes, and lifestyle sub-score calculators with their point tables
// ABOUTME: Each sub-score is an additive sum of independent contributions capped at 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sub-score calculators.
//!
//! Every contribution is looked up independently and the sum is capped at
//! 100. Absent optional measurements contribute nothing. The enumerated
//! lookup tables each carry their own default for unspecified values; the
//! defaults differ between tables and must stay that way.
//!
//! The two blood pressure ladders (cardiovascular and lifestyle) look alike
//! but are tuned separately, so they are kept as independent functions.

use pierre_health_core::constants::{
    age, blood_pressure, blood_sugar, bmi, cholesterol, scoring, waist,
};
use pierre_health_core::models::{
    ActivityLevel, AlcoholConsumption, AssessmentInput, DietQuality, SmokingStatus,
};

/// Cardiovascular sub-score (0-100)
#[must_use]
pub fn cardiovascular_risk(input: &AssessmentInput, bmi_value: Option<f64>) -> u8 {
    let mut points = bmi_value.map_or(0, cardiovascular_bmi_points);
    points += cardiovascular_blood_pressure_points(input.systolic_bp, input.diastolic_bp);
    points += input.cholesterol_total.map_or(0, total_cholesterol_points);
    points += input.cholesterol_hdl.map_or(0, hdl_points);
    points += cardiovascular_smoking_points(input.smoking_status);
    points += activity_points(input.activity_level);

    let history = &input.medical_history;
    if history.has_heart_disease {
        points += 5;
    }
    if history.has_hypertension {
        points += 3;
    }
    if history.family_history_heart {
        points += 2;
    }

    cap(points)
}

/// Diabetes sub-score (0-100)
#[must_use]
pub fn diabetes_risk(input: &AssessmentInput, bmi_value: Option<f64>) -> u8 {
    let mut points = bmi_value.map_or(0, diabetes_bmi_points);
    points += input.blood_sugar.map_or(0, blood_sugar_points);
    points += input.waist_cm.map_or(0, waist_points);
    points += activity_points(input.activity_level);
    points += diet_points(input.diet_quality);

    let history = &input.medical_history;
    if history.has_diabetes {
        points += 5;
    }
    if history.family_history_diabetes {
        points += 5;
    }

    cap(points)
}

/// Lifestyle and blood pressure sub-score (0-100)
///
/// `age_years` is `None` when no birth date could be resolved, in which
/// case the age contribution is skipped.
#[must_use]
pub fn lifestyle_risk(
    input: &AssessmentInput,
    bmi_value: Option<f64>,
    age_years: Option<u32>,
) -> u8 {
    let mut points = lifestyle_blood_pressure_points(input.systolic_bp, input.diastolic_bp);
    points += bmi_value.map_or(0, lifestyle_bmi_points);
    points += age_years.map_or(0, age_points);
    points += lifestyle_smoking_points(input.smoking_status);

    let history = &input.medical_history;
    if history.family_history_heart {
        points += 7;
    }
    if history.family_history_diabetes {
        points += 3;
    }

    points += alcohol_points(input.alcohol_consumption);

    cap(points)
}

fn cap(points: u32) -> u8 {
    u8::try_from(points.min(u32::from(scoring::MAX_SCORE))).unwrap_or(scoring::MAX_SCORE)
}

fn cardiovascular_bmi_points(value: f64) -> u32 {
    if value < bmi::UNDERWEIGHT_BELOW {
        5
    } else if value < bmi::OVERWEIGHT_FROM {
        0
    } else if value < bmi::OBESE_FROM {
        8
    } else if value < bmi::OBESE_CLASS_II_FROM {
        12
    } else {
        15
    }
}

fn diabetes_bmi_points(value: f64) -> u32 {
    if value < bmi::OVERWEIGHT_FROM {
        0
    } else if value < bmi::OBESE_FROM {
        10
    } else if value < bmi::OBESE_CLASS_II_FROM {
        18
    } else {
        25
    }
}

// 18.5-24.9 falls through to zero
fn lifestyle_bmi_points(value: f64) -> u32 {
    if value >= bmi::OBESE_FROM {
        15
    } else if value >= bmi::OVERWEIGHT_FROM {
        10
    } else if value < bmi::UNDERWEIGHT_BELOW {
        5
    } else {
        0
    }
}

/// First matching tier wins, checked from most to least severe
fn cardiovascular_blood_pressure_points(systolic: u16, diastolic: u16) -> u32 {
    if systolic >= blood_pressure::CRISIS_SYSTOLIC || diastolic >= blood_pressure::CRISIS_DIASTOLIC
    {
        20
    } else if systolic >= blood_pressure::STAGE_2_SYSTOLIC
        || diastolic >= blood_pressure::STAGE_2_DIASTOLIC
    {
        15
    } else if systolic >= blood_pressure::STAGE_1_SYSTOLIC {
        10
    } else if systolic >= blood_pressure::ELEVATED_SYSTOLIC {
        5
    } else {
        0
    }
}

/// First matching tier wins; unlike the cardiovascular ladder, stage 1 also
/// triggers on diastolic alone
fn lifestyle_blood_pressure_points(systolic: u16, diastolic: u16) -> u32 {
    if systolic >= blood_pressure::CRISIS_SYSTOLIC || diastolic >= blood_pressure::CRISIS_DIASTOLIC
    {
        40
    } else if systolic >= blood_pressure::STAGE_2_SYSTOLIC
        || diastolic >= blood_pressure::STAGE_2_DIASTOLIC
    {
        30
    } else if systolic >= blood_pressure::STAGE_1_SYSTOLIC
        || diastolic >= blood_pressure::STAGE_1_DIASTOLIC
    {
        20
    } else if systolic >= blood_pressure::ELEVATED_SYSTOLIC {
        10
    } else {
        0
    }
}

fn total_cholesterol_points(total: u16) -> u32 {
    if total >= cholesterol::TOTAL_HIGH_FROM {
        15
    } else if total >= cholesterol::TOTAL_BORDERLINE_FROM {
        10
    } else if total >= cholesterol::TOTAL_UPPER_NORMAL_FROM {
        5
    } else {
        0
    }
}

// Lower HDL is worse
fn hdl_points(hdl: u16) -> u32 {
    if hdl < cholesterol::HDL_POOR_BELOW {
        10
    } else if hdl < cholesterol::HDL_BORDERLINE_BELOW {
        5
    } else {
        0
    }
}

fn blood_sugar_points(sugar: f64) -> u32 {
    if sugar >= blood_sugar::DIABETIC_FROM {
        30
    } else if sugar >= blood_sugar::PRE_DIABETIC_FROM {
        20
    } else if sugar >= blood_sugar::HIGH_NORMAL_FROM {
        10
    } else {
        0
    }
}

fn waist_points(waist_cm: f64) -> u32 {
    if waist_cm > waist::HIGH_ABOVE {
        15
    } else if waist_cm > waist::ELEVATED_ABOVE {
        10
    } else if waist_cm > waist::MILD_ABOVE {
        5
    } else {
        0
    }
}

fn age_points(years: u32) -> u32 {
    if years >= age::SENIOR_FROM {
        10
    } else if years >= age::MIDDLE_AGE_FROM {
        7
    } else if years >= age::EARLY_MIDDLE_AGE_FROM {
        4
    } else {
        0
    }
}

#[allow(clippy::match_same_arms)]
const fn cardiovascular_smoking_points(status: SmokingStatus) -> u32 {
    match status {
        SmokingStatus::Never => 0,
        SmokingStatus::Former => 5,
        SmokingStatus::Occasional => 10,
        SmokingStatus::Regular => 15,
        SmokingStatus::Heavy => 20,
        SmokingStatus::Unspecified => 0,
    }
}

#[allow(clippy::match_same_arms)]
const fn lifestyle_smoking_points(status: SmokingStatus) -> u32 {
    match status {
        SmokingStatus::Never => 0,
        SmokingStatus::Former => 5,
        SmokingStatus::Occasional => 8,
        SmokingStatus::Regular => 12,
        SmokingStatus::Heavy => 15,
        SmokingStatus::Unspecified => 0,
    }
}

// Less active is worse; an unspecified level is not treated as active
const fn activity_points(level: ActivityLevel) -> u32 {
    match level {
        ActivityLevel::VeryActive => 0,
        ActivityLevel::Active => 2,
        ActivityLevel::Moderate => 4,
        ActivityLevel::Light => 7,
        ActivityLevel::Sedentary => 10,
        ActivityLevel::Unspecified => 5,
    }
}

const fn diet_points(quality: DietQuality) -> u32 {
    match quality {
        DietQuality::Excellent => 0,
        DietQuality::Good => 3,
        DietQuality::Fair => 6,
        DietQuality::Poor => 10,
        DietQuality::Unspecified => 5,
    }
}

#[allow(clippy::match_same_arms)]
const fn alcohol_points(consumption: AlcoholConsumption) -> u32 {
    match consumption {
        AlcoholConsumption::Abstinent => 0,
        AlcoholConsumption::Occasional => 2,
        AlcoholConsumption::Moderate => 6,
        AlcoholConsumption::Heavy => 10,
        AlcoholConsumption::Unspecified => 0,
    }
}
