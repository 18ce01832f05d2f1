// ABOUTME: Health goal models with free-text target/current values and derived progress
// ABOUTME: GoalType, GoalStatus, Goal, and the draft/change sets used to create and edit goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Area of health a goal targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Weight management
    Weight,
    /// Exercise / fitness
    Exercise,
    /// Diet improvement
    Diet,
    /// Quit smoking
    Smoking,
    /// Reduce alcohol
    Alcohol,
    /// Improve sleep
    Sleep,
    /// Stress management
    Stress,
    /// Blood pressure control
    Bp,
    /// Blood sugar control
    Sugar,
    /// Anything else
    Other,
}

impl GoalType {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weight => "Weight Management",
            Self::Exercise => "Exercise/Fitness",
            Self::Diet => "Diet Improvement",
            Self::Smoking => "Quit Smoking",
            Self::Alcohol => "Reduce Alcohol",
            Self::Sleep => "Improve Sleep",
            Self::Stress => "Stress Management",
            Self::Bp => "Blood Pressure Control",
            Self::Sugar => "Blood Sugar Control",
            Self::Other => "Other",
        }
    }
}

/// Lifecycle state of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Being worked on
    #[default]
    Active,
    /// Reached
    Completed,
    /// On hold
    Paused,
    /// Abandoned
    Cancelled,
}

/// A user's health goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Area of health targeted
    pub goal_type: GoalType,
    /// Short title
    pub title: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// Free-text target, e.g. "70" or "70 kg"
    #[serde(default)]
    pub target_value: String,
    /// Free-text current value
    #[serde(default)]
    pub current_value: String,
    /// First day of the goal
    pub start_date: NaiveDate,
    /// Intended completion date, not checked against `start_date`
    pub target_date: NaiveDate,
    /// Lifecycle state
    #[serde(default)]
    pub status: GoalStatus,
    /// Completion percentage, always within 0-100
    #[serde(default)]
    pub progress: u8,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDraft {
    /// Owning user
    pub user_id: Uuid,
    /// Area of health targeted
    pub goal_type: GoalType,
    /// Short title
    pub title: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// Free-text target
    #[serde(default)]
    pub target_value: String,
    /// Free-text current value
    #[serde(default)]
    pub current_value: String,
    /// First day of the goal
    pub start_date: NaiveDate,
    /// Intended completion date
    pub target_date: NaiveDate,
    /// Initial status
    #[serde(default)]
    pub status: GoalStatus,
    /// Manually entered progress, kept when it cannot be derived
    #[serde(default)]
    pub progress: Option<u8>,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

/// Partial update of a goal; `None` leaves a field as it is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalChanges {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New free-text target
    pub target_value: Option<String>,
    /// New free-text current value
    pub current_value: Option<String>,
    /// New target date
    pub target_date: Option<NaiveDate>,
    /// New status
    pub status: Option<GoalStatus>,
    /// Manually entered progress
    pub progress: Option<u8>,
    /// New notes
    pub notes: Option<String>,
}
