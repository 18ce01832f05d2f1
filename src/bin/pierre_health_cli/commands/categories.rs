// ABOUTME: Category command for pierre-health-cli
// ABOUTME: Prints BMI and blood pressure categories for raw measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_output;
use pierre_health_risk::config::AppConfig;
use pierre_health_risk::errors::AppResult;
use pierre_health_risk::formatters::{format_output, TextRender};
use pierre_health_risk::intelligence::{calculate_bmi, BloodPressureCategory, BmiCategory};
use serde::Serialize;

#[derive(Serialize)]
struct Categories {
    bmi: Option<f64>,
    bmi_category: BmiCategory,
    systolic_bp: u16,
    diastolic_bp: u16,
    blood_pressure_category: BloodPressureCategory,
}

impl TextRender for Categories {
    fn render_text(&self) -> String {
        let bmi = self
            .bmi
            .map_or_else(|| "n/a".to_owned(), |value| format!("{value:.2}"));
        format!(
            "BMI: {bmi} ({})\nBlood pressure: {}/{} mmHg ({})",
            self.bmi_category, self.systolic_bp, self.diastolic_bp, self.blood_pressure_category
        )
    }
}

/// Print BMI and blood pressure categories
pub fn show(
    config: &AppConfig,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    systolic: u16,
    diastolic: u16,
) -> AppResult<()> {
    let bmi = calculate_bmi(height_cm, weight_kg);
    let categories = Categories {
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        systolic_bp: systolic,
        diastolic_bp: diastolic,
        blood_pressure_category: BloodPressureCategory::from_readings(systolic, diastolic),
    };

    print_output(format_output(&categories, config.output_format))
}
