// ABOUTME: Assessment commands for pierre-health-cli
// ABOUTME: Scores assessment files and builds the history chart and dashboard summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_output;
use chrono::NaiveDate;
use pierre_health_risk::config::AppConfig;
use pierre_health_risk::documents::{read_assessment_inputs, read_json};
use pierre_health_risk::errors::{AppError, AppResult};
use pierre_health_risk::formatters::{format_output, format_structured, AssessmentReport};
use pierre_health_risk::intelligence::RiskEngine;
use pierre_health_risk::models::{Goal, PersistedAssessment};
use pierre_health_risk::services::{dashboard_summary, history_chart, AssessmentService};
use pierre_health_risk::validation::validate_assessment;
use std::path::Path;
use tracing::info;

/// Score one assessment as a guest and print its report
pub fn score(config: &AppConfig, input: &Path, birth_date: Option<NaiveDate>) -> AppResult<()> {
    let mut inputs = read_assessment_inputs(input)?;
    if inputs.len() != 1 {
        return Err(AppError::invalid_input(format!(
            "{} holds {} assessments; use score-batch for more than one",
            input.display(),
            inputs.len()
        )));
    }
    let assessment_input = inputs.remove(0);

    let service = AssessmentService::new().with_strict_validation(config.strict_validation);
    let assessment = service.submit_guest(assessment_input, birth_date)?;
    let report = AssessmentReport::from_view(&assessment);

    print_output(format_output(&report, config.output_format))
}

/// Validate and score every assessment in a file, in parallel
pub fn score_batch(config: &AppConfig, input: &Path) -> AppResult<()> {
    let inputs = read_assessment_inputs(input)?;
    for (index, assessment_input) in inputs.iter().enumerate() {
        validate_assessment(assessment_input, config.strict_validation).map_err(|mut e| {
            e.message = format!("assessment #{index}: {}", e.message);
            e
        })?;
    }

    let scored = RiskEngine::new().score_batch(&inputs);
    info!(count = scored.len(), "Scored assessment batch");

    print_output(format_structured(&scored, config.output_format))
}

/// Print the history chart for stored assessments
pub fn history(config: &AppConfig, input: &Path) -> AppResult<()> {
    let assessments: Vec<PersistedAssessment> = read_json(input)?;
    let chart = history_chart(&assessments);

    print_output(format_output(&chart, config.output_format))
}

/// Print the dashboard summary for stored assessments and optional goals
pub fn dashboard(config: &AppConfig, input: &Path, goals: Option<&Path>) -> AppResult<()> {
    let assessments: Vec<PersistedAssessment> = read_json(input)?;
    let goals: Vec<Goal> = match goals {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    let summary = dashboard_summary(&assessments, &goals);

    print_output(format_output(&summary, config.output_format))
}
