// ABOUTME: JSON document loading for assessment and goal inputs read from disk
// ABOUTME: Maps I/O failures to storage errors and malformed JSON to InvalidFormat with the path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_health_core::errors::{AppError, AppResult, ErrorCode};
use pierre_health_core::models::AssessmentInput;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a JSON document
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read and `InvalidFormat`
/// if its contents do not parse as `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_details(serde_json::json!({ "path": path.display().to_string() }))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("{}: {e}", path.display()),
        )
        .with_source(e)
    })
}

/// Read assessment inputs from a file holding either one object or an array
///
/// # Errors
///
/// Same as [`read_json`].
pub fn read_assessment_inputs(path: &Path) -> AppResult<Vec<AssessmentInput>> {
    let document: Value = read_json(path)?;
    let parsed = if document.is_array() {
        serde_json::from_value(document)
    } else {
        serde_json::from_value::<AssessmentInput>(document).map(|input| vec![input])
    };
    parsed.map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("{}: {e}", path.display()),
        )
        .with_source(e)
    })
}
