// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output helpers for pierre-health-cli
// ABOUTME: Writes formatted results to stdout and maps format errors to AppError

use pierre_health_risk::errors::{AppError, AppResult, ErrorCode};
use pierre_health_risk::formatters::{FormatError, FormattedOutput};
use std::io::{self, Write};

/// Print a formatted result followed by a newline
pub fn print_output(output: Result<FormattedOutput, FormatError>) -> AppResult<()> {
    let output = output.map_err(|e| {
        AppError::new(ErrorCode::SerializationError, e.message.clone()).with_source(e)
    })?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output.data.trim_end())?;
    Ok(())
}
