// ABOUTME: Goal progress derivation from free-text target and current values
// ABOUTME: Parses both values as numbers and yields a rounded, clamped 0-100 percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal progress derivation.
//!
//! Progress is `round(100 * current / target)` clamped to 0-100. When either
//! text is blank or not a plain number ("100 kg" counts as non-numeric) the
//! previously stored progress is returned untouched. A zero target yields 0.

use pierre_health_core::constants::goal_progress::{MAX_PERCENT, MIN_PERCENT};
use pierre_health_core::models::Goal;
use tracing::debug;

/// Derives goal completion percentages
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalProgressCalculator;

impl GoalProgressCalculator {
    /// Progress for the given texts, or `existing_progress` if it cannot be derived
    #[must_use]
    pub fn derive_progress(target_text: &str, current_text: &str, existing_progress: u8) -> u8 {
        Self::try_derive(target_text, current_text).unwrap_or(existing_progress)
    }

    /// Progress for the given texts, `None` when either is blank or non-numeric
    #[must_use]
    #[allow(clippy::float_cmp)] // exact zero target is a defined rule
    pub fn try_derive(target_text: &str, current_text: &str) -> Option<u8> {
        let target = parse_numeric(target_text)?;
        let current = parse_numeric(current_text)?;

        if target == 0.0 {
            return Some(MIN_PERCENT);
        }

        // f64::round rounds half away from zero
        let percent = (100.0 * current / target).round();
        Some(percent.clamp(f64::from(MIN_PERCENT), f64::from(MAX_PERCENT)) as u8)
    }

    /// Re-derive `goal.progress` from its text values
    ///
    /// Returns whether the stored progress changed.
    pub fn apply(goal: &mut Goal) -> bool {
        let previous = goal.progress;
        goal.progress =
            Self::derive_progress(&goal.target_value, &goal.current_value, goal.progress);
        if goal.progress != previous {
            debug!(
                goal.id = %goal.id,
                previous,
                progress = goal.progress,
                "Goal progress re-derived"
            );
        }
        goal.progress != previous
    }
}

/// Whole-string decimal parse; blank, partial, and non-finite values are rejected
fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_rejects_units_and_blanks() {
        assert_eq!(parse_numeric(" 42.5 "), Some(42.5));
        assert_eq!(parse_numeric("100 kg"), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("NaN"), None);
    }

    #[test]
    fn test_negative_zero_target_counts_as_zero() {
        assert_eq!(GoalProgressCalculator::try_derive("-0", "5"), Some(0));
    }
}
