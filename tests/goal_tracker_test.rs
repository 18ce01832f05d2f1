// ABOUTME: Integration tests for the goal tracking service
// ABOUTME: Verifies progress derivation on create and on edits that change target or current
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use pierre_health_risk::errors::ErrorCode;
use pierre_health_risk::models::{GoalChanges, GoalDraft, GoalStatus, GoalType};
use pierre_health_risk::services::GoalTracker;
use uuid::Uuid;

fn draft(target: &str, current: &str, progress: Option<u8>) -> GoalDraft {
    GoalDraft {
        user_id: Uuid::new_v4(),
        goal_type: GoalType::Exercise,
        title: "Weekly running distance".to_owned(),
        description: String::new(),
        target_value: target.to_owned(),
        current_value: current.to_owned(),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        target_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        status: GoalStatus::Active,
        progress,
        notes: String::new(),
    }
}

#[test]
fn test_create_derives_progress() {
    let goal = GoalTracker::create(draft("40", "10", None)).unwrap();
    assert_eq!(goal.progress, 25);
    assert_eq!(goal.created_at, goal.updated_at);
}

#[test]
fn test_create_keeps_manual_progress_for_non_numeric_values() {
    let goal = GoalTracker::create(draft("run a marathon", "half", Some(40))).unwrap();
    assert_eq!(goal.progress, 40);
}

#[test]
fn test_derived_progress_overrides_manual_progress() {
    let goal = GoalTracker::create(draft("40", "30", Some(10))).unwrap();
    assert_eq!(goal.progress, 75);
}

#[test]
fn test_create_rejects_blank_title() {
    let mut invalid = draft("40", "10", None);
    invalid.title = "   ".to_owned();
    let error = GoalTracker::create(invalid).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_create_rejects_progress_above_100() {
    let error = GoalTracker::create(draft("", "", Some(101))).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.field.as_deref(), Some("progress"));
}

#[test]
fn test_update_current_value_rederives() {
    let goal = GoalTracker::create(draft("40", "10", None)).unwrap();
    let updated = GoalTracker::update(
        goal,
        GoalChanges {
            current_value: Some("20".to_owned()),
            ..GoalChanges::default()
        },
    )
    .unwrap();
    assert_eq!(updated.progress, 50);
    assert!(updated.updated_at >= updated.created_at);
}

#[test]
fn test_update_without_value_change_keeps_manual_progress() {
    let goal = GoalTracker::create(draft("40", "10", None)).unwrap();
    let updated = GoalTracker::update(
        goal,
        GoalChanges {
            progress: Some(90),
            notes: Some("felt strong".to_owned()),
            ..GoalChanges::default()
        },
    )
    .unwrap();
    assert_eq!(updated.progress, 90);
    assert_eq!(updated.notes, "felt strong");
}

#[test]
fn test_update_to_non_numeric_value_keeps_progress() {
    let goal = GoalTracker::create(draft("40", "10", None)).unwrap();
    let updated = GoalTracker::update(
        goal,
        GoalChanges {
            current_value: Some("about 15 km".to_owned()),
            ..GoalChanges::default()
        },
    )
    .unwrap();
    assert_eq!(updated.progress, 25);
    assert_eq!(updated.current_value, "about 15 km");
}

#[test]
fn test_update_status_and_title() {
    let goal = GoalTracker::create(draft("40", "40", None)).unwrap();
    assert_eq!(goal.progress, 100);
    let updated = GoalTracker::update(
        goal,
        GoalChanges {
            title: Some("Run 40 km a week".to_owned()),
            status: Some(GoalStatus::Completed),
            ..GoalChanges::default()
        },
    )
    .unwrap();
    assert_eq!(updated.status, GoalStatus::Completed);
    assert_eq!(updated.title, "Run 40 km a week");
    assert_eq!(updated.progress, 100);
}

#[test]
fn test_goal_changes_deserialize_partially() {
    let changes: GoalChanges = serde_json::from_str(r#"{ "target_value": "60" }"#).unwrap();
    assert_eq!(changes.target_value.as_deref(), Some("60"));
    assert!(changes.current_value.is_none());
}
