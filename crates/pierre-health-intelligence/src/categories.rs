// ABOUTME: Shared measurement helpers: BMI calculation, BMI and blood pressure categories, age
// ABOUTME: Used by the sub-score calculators, recommendations, and result display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Measurement categorisation helpers.

use chrono::{Datelike, NaiveDate};
use pierre_health_core::constants::{bmi, blood_pressure};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body-mass index from height and weight, rounded to two decimals
///
/// Returns `None` when either measurement is absent or not positive; every
/// BMI-based contribution is then skipped.
#[must_use]
pub fn calculate_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let height_m = height_cm.filter(|h| *h > 0.0)? / 100.0;
    let weight = weight_kg.filter(|w| *w > 0.0)?;
    let raw = weight / (height_m * height_m);
    raw.is_finite().then(|| round_decimal(raw, bmi::DECIMAL_PLACES))
}

/// Round to `places` decimals through the shortest correctly rounded decimal
///
/// Exact binary ties go to the even digit (5.125 becomes 5.12), unlike
/// scaling by a power of ten and calling `f64::round`.
#[must_use]
pub fn round_decimal(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Age in whole years on `today`
///
/// The year difference is reduced by one when the birthday has not yet
/// occurred this year. Birth dates after `today` yield `None`.
#[must_use]
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> Option<u32> {
    let birthday_pending = (today.month(), today.day()) < (birth_date.month(), birth_date.day());
    let age = today.year() - birth_date.year() - i32::from(birthday_pending);
    u32::try_from(age).ok()
}

/// BMI category shown with assessment results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI not available
    Unknown,
    /// Below 18.5
    Underweight,
    /// 18.5 to below 25
    Normal,
    /// 25 to below 30
    Overweight,
    /// 30 to below 35
    ObeseClassI,
    /// 35 to below 40
    ObeseClassII,
    /// 40 and above
    ObeseClassIII,
}

impl BmiCategory {
    /// Categorise an optional BMI value
    #[must_use]
    pub fn from_bmi(value: Option<f64>) -> Self {
        let Some(value) = value else {
            return Self::Unknown;
        };
        if value < bmi::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if value < bmi::OVERWEIGHT_FROM {
            Self::Normal
        } else if value < bmi::OBESE_FROM {
            Self::Overweight
        } else if value < bmi::OBESE_CLASS_II_FROM {
            Self::ObeseClassI
        } else if value < bmi::OBESE_CLASS_III_FROM {
            Self::ObeseClassII
        } else {
            Self::ObeseClassIII
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::ObeseClassI => "Obese Class I",
            Self::ObeseClassII => "Obese Class II",
            Self::ObeseClassIII => "Obese Class III",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Blood pressure category shown with assessment results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureCategory {
    /// Systolic below 120 and diastolic below 80
    Normal,
    /// Systolic below 130 and diastolic below 80
    Elevated,
    /// Systolic below 140 or diastolic below 90
    HypertensionStage1,
    /// Systolic below 180 or diastolic below 120
    HypertensionStage2,
    /// Anything higher
    HypertensiveCrisis,
}

impl BloodPressureCategory {
    /// Categorise a systolic/diastolic pair
    ///
    /// The ladder is checked top to bottom and the stage conditions use
    /// `or`, so e.g. 150/85 lands in stage 1.
    #[must_use]
    pub const fn from_readings(systolic: u16, diastolic: u16) -> Self {
        if systolic < blood_pressure::ELEVATED_SYSTOLIC
            && diastolic < blood_pressure::STAGE_1_DIASTOLIC
        {
            Self::Normal
        } else if systolic < blood_pressure::STAGE_1_SYSTOLIC
            && diastolic < blood_pressure::STAGE_1_DIASTOLIC
        {
            Self::Elevated
        } else if systolic < blood_pressure::STAGE_2_SYSTOLIC
            || diastolic < blood_pressure::STAGE_2_DIASTOLIC
        {
            Self::HypertensionStage1
        } else if systolic < blood_pressure::CRISIS_SYSTOLIC
            || diastolic < blood_pressure::CRISIS_DIASTOLIC
        {
            Self::HypertensionStage2
        } else {
            Self::HypertensiveCrisis
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Elevated => "Elevated",
            Self::HypertensionStage1 => "High Blood Pressure Stage 1",
            Self::HypertensionStage2 => "High Blood Pressure Stage 2",
            Self::HypertensiveCrisis => "Hypertensive Crisis",
        }
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
