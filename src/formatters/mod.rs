// ABOUTME: Output format abstraction for assessment reports, charts, and goal progress
// ABOUTME: Supports JSON (default), a human-readable text layout, and token-efficient TOON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Any serializable value can be rendered as JSON or TOON. Values that also
//! implement [`TextRender`] get a plain text layout for terminals.
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, universal compatibility
//! - **Text**: Human-readable summary for terminal output
//! - **TOON**: Token-Oriented Object Notation for LLM consumption

/// Assessment report built from any assessment view
pub mod report;

pub use report::AssessmentReport;

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default) - universal compatibility
    #[default]
    Json,
    /// Plain text layout for people reading a terminal
    Text,
    /// TOON format - Token-Oriented Object Notation for LLM efficiency
    Toon,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Self::Text,
            "toon" => Self::Toon,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain",
            // TOON doesn't have an official MIME type yet, use vendor prefix
            Self::Toon => "application/vnd.toon",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain text rendering for terminal output
pub trait TextRender {
    /// Render as multi-line text
    fn render_text(&self) -> String;
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

/// Format serializable data to the specified output format
///
/// `Text` uses the value's [`TextRender`] layout.
///
/// # Errors
/// Returns `FormatError` if:
/// - JSON serialization fails (for JSON format)
/// - Converting to JSON value fails (for TOON format)
/// - TOON encoding fails (for TOON format)
pub fn format_output<T: Serialize + TextRender>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Text => data.render_text(),
        OutputFormat::Toon => encode_toon(data)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Format data without a text layout; `Text` falls back to pretty JSON
///
/// # Errors
/// Returns `FormatError` if JSON serialization or TOON encoding fails
pub fn format_structured<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let (data, format) = match format {
        OutputFormat::Json | OutputFormat::Text => {
            let json = serde_json::to_string_pretty(data).map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })?;
            (json, OutputFormat::Json)
        }
        OutputFormat::Toon => (encode_toon(data)?, OutputFormat::Toon),
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

fn encode_toon<T: Serialize>(data: &T) -> Result<String, FormatError> {
    let format = OutputFormat::Toon;
    // Convert to serde_json::Value first, then to TOON
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format,
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })
}
