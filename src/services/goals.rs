// ABOUTME: Goal tracking service creating and editing health goals
// ABOUTME: Re-derives progress from free-text target/current values whenever they change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::AppLogger;
use crate::validation::validate_progress;
use chrono::Utc;
use pierre_health_core::errors::{AppError, AppResult};
use pierre_health_core::models::{Goal, GoalChanges, GoalDraft};
use pierre_health_intelligence::GoalProgressCalculator;
use uuid::Uuid;

/// Creates and edits goals, keeping `progress` in step with the text values
///
/// A manually entered progress is applied first. When both the target and
/// the current value parse as numbers, the derived percentage replaces it.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalTracker;

impl GoalTracker {
    /// Create a goal from a draft
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank title and
    /// `ValueOutOfRange` for a manual progress above 100.
    pub fn create(draft: GoalDraft) -> AppResult<Goal> {
        if draft.title.trim().is_empty() {
            return Err(AppError::missing_field("title").with_user_id(draft.user_id));
        }
        if let Some(progress) = draft.progress {
            validate_progress(progress).map_err(|e| e.with_user_id(draft.user_id))?;
        }

        let now = Utc::now();
        let mut goal = Goal {
            id: Uuid::new_v4(),
            user_id: draft.user_id,
            goal_type: draft.goal_type,
            title: draft.title,
            description: draft.description,
            target_value: draft.target_value,
            current_value: draft.current_value,
            start_date: draft.start_date,
            target_date: draft.target_date,
            status: draft.status,
            progress: draft.progress.unwrap_or_default(),
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        };

        let derived = GoalProgressCalculator::apply(&mut goal);
        AppLogger::log_goal_saved(goal.id, goal.user_id, goal.progress, derived);
        Ok(goal)
    }

    /// Apply edits to a goal
    ///
    /// Progress is re-derived only when the target or current text changed.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the title is cleared and
    /// `ValueOutOfRange` for a manual progress above 100. The goal is
    /// consumed either way, so callers keep their stored copy on error.
    pub fn update(mut goal: Goal, changes: GoalChanges) -> AppResult<Goal> {
        if let Some(progress) = changes.progress {
            validate_progress(progress).map_err(|e| e.with_user_id(goal.user_id))?;
        }
        if let Some(title) = changes.title {
            if title.trim().is_empty() {
                return Err(AppError::missing_field("title").with_user_id(goal.user_id));
            }
            goal.title = title;
        }

        let mut values_changed = false;
        if let Some(target) = changes.target_value {
            values_changed |= target != goal.target_value;
            goal.target_value = target;
        }
        if let Some(current) = changes.current_value {
            values_changed |= current != goal.current_value;
            goal.current_value = current;
        }
        if let Some(description) = changes.description {
            goal.description = description;
        }
        if let Some(target_date) = changes.target_date {
            goal.target_date = target_date;
        }
        if let Some(status) = changes.status {
            goal.status = status;
        }
        if let Some(notes) = changes.notes {
            goal.notes = notes;
        }
        if let Some(progress) = changes.progress {
            goal.progress = progress;
        }

        let derived = values_changed && GoalProgressCalculator::apply(&mut goal);
        goal.updated_at = Utc::now();
        AppLogger::log_goal_saved(goal.id, goal.user_id, goal.progress, derived);
        Ok(goal)
    }
}
