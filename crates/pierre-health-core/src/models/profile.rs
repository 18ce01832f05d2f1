// ABOUTME: User profile data and the optional birth-date lookup used for age scoring
// ABOUTME: ProfileLookup is a weak reference: absence of a profile or birth date is never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Self-reported gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    #[serde(rename = "M")]
    Male,
    /// Female
    #[serde(rename = "F")]
    Female,
    /// Other
    #[serde(rename = "O")]
    Other,
}

/// Extended profile attached to a user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Owning user
    pub user_id: Uuid,
    /// Date of birth, if the user provided one
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Gender, if the user provided one
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Profile creation time
    pub created_at: DateTime<Utc>,
}

/// Optional lookup of a user's date of birth
///
/// Implementations return `None` for unknown users and for profiles without
/// a birth date; callers treat both as "skip the age contribution".
pub trait ProfileLookup {
    /// Date of birth for `user_id`, if known
    fn date_of_birth(&self, user_id: Uuid) -> Option<NaiveDate>;
}

/// In-memory profile directory keyed by user
#[derive(Debug, Clone, Default)]
pub struct ProfileDirectory {
    profiles: HashMap<Uuid, UserProfile>,
}

impl ProfileDirectory {
    /// Create an empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the profile for its user
    pub fn upsert(&mut self, profile: UserProfile) {
        self.profiles.insert(profile.user_id, profile);
    }

    /// Profile for `user_id`, if present
    #[must_use]
    pub fn get(&self, user_id: Uuid) -> Option<&UserProfile> {
        self.profiles.get(&user_id)
    }
}

impl ProfileLookup for ProfileDirectory {
    fn date_of_birth(&self, user_id: Uuid) -> Option<NaiveDate> {
        self.get(user_id).and_then(|profile| profile.date_of_birth)
    }
}
