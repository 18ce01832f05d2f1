// ABOUTME: Integration tests for goal progress derivation from free-text values
// ABOUTME: Covers rounding, clamping, zero targets, and non-numeric texts left unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_health_risk::intelligence::GoalProgressCalculator;

fn derive(target: &str, current: &str, existing: u8) -> u8 {
    GoalProgressCalculator::derive_progress(target, current, existing)
}

#[test]
fn test_half_way() {
    assert_eq!(derive("100", "50", 0), 50);
}

#[test]
fn test_rounds_half_away_from_zero() {
    assert_eq!(derive("100", "75.5", 0), 76);
    assert_eq!(derive("100", "75.4", 0), 75);
}

#[test]
fn test_clamps_above_target() {
    assert_eq!(derive("100", "150", 0), 100);
}

#[test]
fn test_clamps_negative_current() {
    assert_eq!(derive("100", "-50", 40), 0);
}

#[test]
fn test_zero_target_yields_zero() {
    assert_eq!(derive("0", "50", 80), 0);
    assert_eq!(derive("0.0", "0", 80), 0);
}

#[test]
fn test_unit_suffix_leaves_progress_unchanged() {
    assert_eq!(derive("100 kg", "70 kg", 25), 25);
    assert_eq!(GoalProgressCalculator::try_derive("100 kg", "70 kg"), None);
}

#[test]
fn test_blank_texts_leave_progress_unchanged() {
    assert_eq!(derive("", "", 30), 30);
    assert_eq!(derive("100", "   ", 30), 30);
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    assert_eq!(derive(" 80 ", "\t60\n", 0), 75);
}

#[test]
fn test_non_finite_texts_are_not_numeric() {
    assert_eq!(derive("inf", "50", 12), 12);
    assert_eq!(derive("100", "NaN", 12), 12);
}

#[test]
fn test_weight_loss_style_goal() {
    // Current above target reads as over 100% and clamps
    assert_eq!(derive("70", "85", 0), 100);
    assert_eq!(derive("70", "35", 0), 50);
}
