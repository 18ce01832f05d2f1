// ABOUTME: Goal progress command for pierre-health-cli
// ABOUTME: Derives a completion percentage from free-text target and current values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_output;
use pierre_health_risk::config::AppConfig;
use pierre_health_risk::errors::AppResult;
use pierre_health_risk::formatters::{format_output, TextRender};
use pierre_health_risk::intelligence::GoalProgressCalculator;
use pierre_health_risk::validation::validate_progress;
use serde::Serialize;

#[derive(Serialize)]
struct ProgressResult<'a> {
    target: &'a str,
    current: &'a str,
    existing_progress: u8,
    progress: u8,
    derived: bool,
}

impl TextRender for ProgressResult<'_> {
    fn render_text(&self) -> String {
        if self.derived {
            format!("Progress: {}%", self.progress)
        } else {
            format!(
                "Progress: {}% (unchanged, values are not both numeric)",
                self.progress
            )
        }
    }
}

/// Derive and print goal progress
pub fn progress(config: &AppConfig, target: &str, current: &str, existing: u8) -> AppResult<()> {
    validate_progress(existing)?;

    let derived = GoalProgressCalculator::try_derive(target, current);
    let result = ProgressResult {
        target,
        current,
        existing_progress: existing,
        progress: derived.unwrap_or(existing),
        derived: derived.is_some(),
    };

    print_output(format_output(&result, config.output_format))
}
