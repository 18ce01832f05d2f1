// ABOUTME: Core data models for health risk assessment and goal tracking
// ABOUTME: Re-exports assessment, lifestyle, view, profile, and goal types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Assessment input, scores, and risk level
mod assessment;
/// Health goals and their edit sets
mod goal;
/// Enumerated lifestyle factors
mod lifestyle;
/// User profiles and the birth-date lookup
mod profile;
/// Read-only assessment view with persisted and guest variants
mod view;

pub use assessment::{
    AssessmentInput, AssessmentScores, MedicalHistory, RiskLevel, ScoredAssessment,
};
pub use goal::{Goal, GoalChanges, GoalDraft, GoalStatus, GoalType};
pub use lifestyle::{
    ActivityLevel, AlcoholConsumption, DietQuality, QualityRating, SleepQuality, SmokingStatus,
    StressLevel,
};
pub use profile::{Gender, ProfileDirectory, ProfileLookup, UserProfile};
pub use view::{AssessmentView, GuestAssessment, PersistedAssessment};
