// ABOUTME: Assessment and goal input validation run before any scoring or saving
// ABOUTME: Enforces measurement ranges, rejects non-finite values, and optional strict categoricals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation
//!
//! The scoring engine trusts its input. Everything a form would reject is
//! rejected here first, with an error naming the offending field.

use pierre_health_core::constants::goal_progress::{MAX_PERCENT, MIN_PERCENT};
use pierre_health_core::constants::input_ranges::{
    MeasurementRange, BLOOD_SUGAR, CHOLESTEROL_HDL, CHOLESTEROL_LDL, CHOLESTEROL_TOTAL,
    DIASTOLIC_BP, HEART_RATE, HEIGHT_CM, SYSTOLIC_BP, WAIST_CM, WEIGHT_KG,
};
use pierre_health_core::errors::{AppError, AppResult};
use pierre_health_core::models::{
    ActivityLevel, AlcoholConsumption, AssessmentInput, QualityRating, SmokingStatus, StressLevel,
};

fn check(range: &MeasurementRange, value: f64) -> AppResult<()> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(AppError::out_of_range(
            range.field,
            value,
            range.min,
            range.max,
        ))
    }
}

fn check_optional(range: &MeasurementRange, value: Option<f64>) -> AppResult<()> {
    value.map_or(Ok(()), |v| check(range, v))
}

fn check_required(range: &MeasurementRange, value: Option<f64>) -> AppResult<()> {
    value.map_or_else(|| Err(AppError::missing_field(range.field)), |v| check(range, v))
}

/// Validate an assessment before scoring
///
/// Height and weight are required; absent optional measurements are
/// accepted. In strict mode every lifestyle
/// answer must be a recognized choice; otherwise unrecognized answers fall
/// through to the scoring defaults.
///
/// # Errors
///
/// Returns `MissingRequiredField` when height or weight is absent,
/// `ValueOutOfRange` for the first measurement outside its accepted range,
/// or `InvalidInput` for an unrecognized answer in strict mode.
pub fn validate_assessment(input: &AssessmentInput, strict: bool) -> AppResult<()> {
    check_required(&HEIGHT_CM, input.height_cm)?;
    check_required(&WEIGHT_KG, input.weight_kg)?;
    check_optional(&WAIST_CM, input.waist_cm)?;
    check(&SYSTOLIC_BP, f64::from(input.systolic_bp))?;
    check(&DIASTOLIC_BP, f64::from(input.diastolic_bp))?;
    check_optional(&HEART_RATE, input.heart_rate.map(f64::from))?;
    check_optional(&BLOOD_SUGAR, input.blood_sugar)?;
    check_optional(&CHOLESTEROL_TOTAL, input.cholesterol_total.map(f64::from))?;
    check_optional(&CHOLESTEROL_HDL, input.cholesterol_hdl.map(f64::from))?;
    check_optional(&CHOLESTEROL_LDL, input.cholesterol_ldl.map(f64::from))?;

    if strict {
        validate_categoricals(input)?;
    }
    Ok(())
}

fn validate_categoricals(input: &AssessmentInput) -> AppResult<()> {
    let unspecified = [
        (
            "activity_level",
            input.activity_level == ActivityLevel::Unspecified,
        ),
        (
            "smoking_status",
            input.smoking_status == SmokingStatus::Unspecified,
        ),
        (
            "alcohol_consumption",
            input.alcohol_consumption == AlcoholConsumption::Unspecified,
        ),
        (
            "diet_quality",
            input.diet_quality == QualityRating::Unspecified,
        ),
        (
            "sleep_quality",
            input.sleep_quality == QualityRating::Unspecified,
        ),
        ("stress_level", input.stress_level == StressLevel::Unspecified),
    ];

    match unspecified.iter().find(|(_, missing)| *missing) {
        Some((field, _)) => Err(AppError::invalid_input(format!(
            "{field} must be one of the listed choices"
        ))
        .with_field(*field)),
        None => Ok(()),
    }
}

/// Validate a manually entered goal progress percentage
///
/// # Errors
///
/// Returns `ValueOutOfRange` when `progress` exceeds 100.
pub fn validate_progress(progress: u8) -> AppResult<()> {
    if (MIN_PERCENT..=MAX_PERCENT).contains(&progress) {
        Ok(())
    } else {
        Err(AppError::out_of_range(
            "progress",
            f64::from(progress),
            f64::from(MIN_PERCENT),
            f64::from(MAX_PERCENT),
        ))
    }
}
