// ABOUTME: Integration tests for reading assessment documents from disk
// ABOUTME: Uses temporary files to cover single objects, arrays, and malformed input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_health_risk::documents::{read_assessment_inputs, read_json};
use pierre_health_risk::errors::ErrorCode;
use pierre_health_risk::models::{ActivityLevel, AlcoholConsumption, PersistedAssessment};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const SINGLE: &str = r#"{
    "height_cm": 175.0,
    "weight_kg": 70.0,
    "systolic_bp": 118,
    "diastolic_bp": 76,
    "activity_level": "very_active",
    "alcohol_consumption": "none",
    "has_hypertension": true
}"#;

#[test]
fn test_single_object_reads_as_one_input() {
    let file = write_temp(SINGLE);
    let inputs = read_assessment_inputs(file.path()).unwrap();

    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].activity_level, ActivityLevel::VeryActive);
    assert_eq!(inputs[0].alcohol_consumption, AlcoholConsumption::Abstinent);
    assert!(inputs[0].medical_history.has_hypertension);
    assert!(inputs[0].blood_sugar.is_none());
}

#[test]
fn test_array_reads_every_input() {
    let file = write_temp(&format!("[{SINGLE}, {SINGLE}, {SINGLE}]"));
    assert_eq!(read_assessment_inputs(file.path()).unwrap().len(), 3);
}

#[test]
fn test_malformed_json_is_invalid_format() {
    let file = write_temp("{ not json");
    let error = read_assessment_inputs(file.path()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_missing_required_reading_is_invalid_format() {
    let file = write_temp(r#"{ "height_cm": 175.0, "weight_kg": 70.0 }"#);
    let error = read_assessment_inputs(file.path()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert!(error.message.contains("systolic_bp"));
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = read_json::<Vec<PersistedAssessment>>(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}
