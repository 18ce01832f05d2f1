// ABOUTME: Read-only view over a scored assessment with persisted and guest variants
// ABOUTME: Lets formatters and charts treat stored and session-only assessments the same way
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::assessment::{AssessmentInput, AssessmentScores, ScoredAssessment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only access to a scored assessment, wherever it lives
pub trait AssessmentView {
    /// Submitted measurements and answers
    fn input(&self) -> &AssessmentInput;

    /// Scores derived at submission time
    fn scores(&self) -> &AssessmentScores;

    /// When the assessment was submitted
    fn created_at(&self) -> DateTime<Utc>;

    /// Owning user, absent for guests
    fn owner_id(&self) -> Option<Uuid>;

    /// Whether this assessment is held only in session state
    fn is_guest(&self) -> bool {
        self.owner_id().is_none()
    }
}

/// Assessment belonging to a registered user and handed to storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedAssessment {
    /// Assessment identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Submission time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
    /// Input and derived scores
    #[serde(flatten)]
    pub assessment: ScoredAssessment,
}

/// Assessment scored for an anonymous visitor, never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestAssessment {
    /// Session-scoped key the outer layer stores the result under
    pub session_key: Uuid,
    /// Submission time
    pub created_at: DateTime<Utc>,
    /// Input and derived scores
    #[serde(flatten)]
    pub assessment: ScoredAssessment,
}

impl AssessmentView for PersistedAssessment {
    fn input(&self) -> &AssessmentInput {
        &self.assessment.input
    }

    fn scores(&self) -> &AssessmentScores {
        &self.assessment.scores
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn owner_id(&self) -> Option<Uuid> {
        Some(self.user_id)
    }
}

impl AssessmentView for GuestAssessment {
    fn input(&self) -> &AssessmentInput {
        &self.assessment.input
    }

    fn scores(&self) -> &AssessmentScores {
        &self.assessment.scores
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn owner_id(&self) -> Option<Uuid> {
        None
    }
}
