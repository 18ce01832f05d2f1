// ABOUTME: Integration tests for output formats and the assessment report
// ABOUTME: Renders persisted and guest assessments as JSON, text, and TOON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{healthy_input, high_risk_input, reference_date};
use pierre_health_risk::formatters::{
    format_output, format_structured, AssessmentReport, OutputFormat, TextRender,
};
use pierre_health_risk::intelligence::{BloodPressureCategory, BmiCategory, RiskEngine};
use pierre_health_risk::services::{AssessmentService, RiskHistoryChart};
use uuid::Uuid;

fn service() -> AssessmentService {
    AssessmentService::with_scorer(RiskEngine::as_of(reference_date()))
}

#[test]
fn test_report_from_guest_and_persisted_views_match() {
    let service = service();
    let guest = service.submit_guest(high_risk_input(), None).unwrap();
    let persisted = service.submit(Uuid::new_v4(), high_risk_input()).unwrap();

    let guest_report = AssessmentReport::from_view(&guest);
    let persisted_report = AssessmentReport::from_view(&persisted);

    assert!(guest_report.guest);
    assert!(!persisted_report.guest);
    assert_eq!(guest_report.overall_risk_score, persisted_report.overall_risk_score);
    assert_eq!(guest_report.recommendations, persisted_report.recommendations);
    assert_eq!(guest_report.recommendations.len(), 10);
}

#[test]
fn test_report_categories() {
    let guest = service().submit_guest(high_risk_input(), None).unwrap();
    let report = AssessmentReport::from_view(&guest);
    assert_eq!(report.bmi_category, BmiCategory::ObeseClassI);
    assert_eq!(
        report.blood_pressure_category,
        BloodPressureCategory::HypertensionStage2
    );
}

#[test]
fn test_text_layout() {
    let guest = service().submit_guest(healthy_input(), None).unwrap();
    let text = AssessmentReport::from_view(&guest).render_text();

    assert!(text.contains("Owner: guest"));
    assert!(text.contains("BMI: 22.86 (Normal)"));
    assert!(text.contains("Blood pressure: 115/75 mmHg (Normal)"));
    assert!(text.contains("Overall risk: 0/100 (Low Risk)"));
    assert!(text.contains("- Great job!"));
}

#[test]
fn test_text_report_line_order() {
    let guest = service().submit_guest(healthy_input(), None).unwrap();
    let text = AssessmentReport::from_view(&guest).render_text();
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("Health Risk Assessment ("));
    assert_eq!(lines[1], "Owner: guest");
    assert_eq!(lines[5], "  Cardiovascular: 0");
    assert_eq!(lines[8], "");
    assert_eq!(lines[9], "Recommendations:");
    assert!(lines[10].starts_with("- Great job!"));
    assert_eq!(lines.len(), 11);
    assert!(text.ends_with('\n'));
}

#[test]
fn test_history_chart_text_rows() {
    let chart = RiskHistoryChart {
        labels: vec!["2025-05-01".to_owned(), "2025-06-01".to_owned()],
        overall: vec![0, 91],
        cardiovascular: vec![0, 92],
        diabetes: vec![0, 93],
        lifestyle: vec![0, 90],
    };

    let text = chart.render_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "date        overall  cardio  diabetes  lifestyle");
    assert_eq!(lines[2], "2025-06-01       91      92        93         90");
    assert!(text.ends_with('\n'));

    assert_eq!(
        RiskHistoryChart::default().render_text(),
        "date        overall  cardio  diabetes  lifestyle\n"
    );
}

#[test]
fn test_json_output() {
    let guest = service().submit_guest(healthy_input(), None).unwrap();
    let report = AssessmentReport::from_view(&guest);
    let output = format_output(&report, OutputFormat::Json).unwrap();

    assert_eq!(output.content_type, "application/json");
    let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();
    assert_eq!(value["risk_level"], "low");
    assert_eq!(value["bmi_category"], "normal");
    assert_eq!(value["guest"], true);
    assert!(value.get("owner_id").is_none());
}

#[test]
fn test_toon_output_is_not_json() {
    let guest = service().submit_guest(healthy_input(), None).unwrap();
    let report = AssessmentReport::from_view(&guest);
    let output = format_output(&report, OutputFormat::Toon).unwrap();

    assert_eq!(output.format, OutputFormat::Toon);
    assert_eq!(output.content_type, "application/vnd.toon");
    assert!(output.data.contains("overall_risk_score"));
    assert!(serde_json::from_str::<serde_json::Value>(&output.data).is_err());
}

#[test]
fn test_structured_text_falls_back_to_json() {
    let output = format_structured(&[1, 2, 3], OutputFormat::Text).unwrap();
    assert_eq!(output.format, OutputFormat::Json);
    let value: Vec<u8> = serde_json::from_str(&output.data).unwrap();
    assert_eq!(value, vec![1, 2, 3]);
}
