// ABOUTME: Enumerated lifestyle factors collected with each health assessment
// ABOUTME: Activity, smoking, alcohol, diet, sleep, and stress choices with string round-tripping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Lifestyle factor enumerations.
//!
//! Each factor serializes as its stored snake_case key. Any key outside the
//! known set deserializes to `Unspecified` rather than failing, so the
//! scoring tables can apply their own default for unrecognized values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Hard exercise daily
    VeryActive,
    /// Missing or unrecognized value
    #[default]
    Unspecified,
}

impl ActivityLevel {
    /// Stored string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
            Self::Unspecified => "unspecified",
        }
    }

    /// Parse from stored string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" | "veryactive" => Self::VeryActive,
            _ => Self::Unspecified,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little or no exercise)",
            Self::Light => "Light (exercise 1-3 days/week)",
            Self::Moderate => "Moderate (exercise 3-5 days/week)",
            Self::Active => "Active (exercise 6-7 days/week)",
            Self::VeryActive => "Very Active (hard exercise daily)",
            Self::Unspecified => "Not specified",
        }
    }

    /// Sedentary or light activity
    #[must_use]
    pub const fn is_low(&self) -> bool {
        matches!(self, Self::Sedentary | Self::Light)
    }
}

/// Smoking habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SmokingStatus {
    /// Never smoked
    Never,
    /// Former smoker
    Former,
    /// Occasional smoker
    Occasional,
    /// Regular smoker
    Regular,
    /// Heavy smoker
    Heavy,
    /// Missing or unrecognized value
    #[default]
    Unspecified,
}

impl SmokingStatus {
    /// Stored string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Former => "former",
            Self::Occasional => "occasional",
            Self::Regular => "regular",
            Self::Heavy => "heavy",
            Self::Unspecified => "unspecified",
        }
    }

    /// Parse from stored string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "never" => Self::Never,
            "former" => Self::Former,
            "occasional" => Self::Occasional,
            "regular" => Self::Regular,
            "heavy" => Self::Heavy,
            _ => Self::Unspecified,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Never => "Never smoked",
            Self::Former => "Former smoker",
            Self::Occasional => "Occasional smoker",
            Self::Regular => "Regular smoker",
            Self::Heavy => "Heavy smoker",
            Self::Unspecified => "Not specified",
        }
    }
}

/// Weekly alcohol consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum AlcoholConsumption {
    /// No alcohol
    #[serde(rename = "none")]
    Abstinent,
    /// 1-2 drinks/week
    Occasional,
    /// 3-7 drinks/week
    Moderate,
    /// 8+ drinks/week
    Heavy,
    /// Missing or unrecognized value
    #[default]
    Unspecified,
}

impl AlcoholConsumption {
    /// Stored string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abstinent => "none",
            Self::Occasional => "occasional",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
            Self::Unspecified => "unspecified",
        }
    }

    /// Parse from stored string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "none" => Self::Abstinent,
            "occasional" => Self::Occasional,
            "moderate" => Self::Moderate,
            "heavy" => Self::Heavy,
            _ => Self::Unspecified,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Abstinent => "None",
            Self::Occasional => "Occasional (1-2 drinks/week)",
            Self::Moderate => "Moderate (3-7 drinks/week)",
            Self::Heavy => "Heavy (8+ drinks/week)",
            Self::Unspecified => "Not specified",
        }
    }
}

/// Four-step quality rating shared by diet and sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum QualityRating {
    /// Poor
    Poor,
    /// Fair
    Fair,
    /// Good
    Good,
    /// Excellent
    Excellent,
    /// Missing or unrecognized value
    #[default]
    Unspecified,
}

impl QualityRating {
    /// Stored string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
            Self::Unspecified => "unspecified",
        }
    }

    /// Parse from stored string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "poor" => Self::Poor,
            "fair" => Self::Fair,
            "good" => Self::Good,
            "excellent" => Self::Excellent,
            _ => Self::Unspecified,
        }
    }

    /// Poor or fair
    #[must_use]
    pub const fn needs_improvement(&self) -> bool {
        matches!(self, Self::Poor | Self::Fair)
    }
}

/// Diet quality, rated on the shared four-step scale
pub type DietQuality = QualityRating;

/// Sleep quality, rated on the shared four-step scale
pub type SleepQuality = QualityRating;

/// Perceived stress level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum StressLevel {
    /// Low
    Low,
    /// Moderate
    Moderate,
    /// High
    High,
    /// Very high
    VeryHigh,
    /// Missing or unrecognized value
    #[default]
    Unspecified,
}

impl StressLevel {
    /// Stored string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
            Self::Unspecified => "unspecified",
        }
    }

    /// Parse from stored string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            "very_high" | "veryhigh" => Self::VeryHigh,
            _ => Self::Unspecified,
        }
    }

    /// High or very high
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        matches!(self, Self::High | Self::VeryHigh)
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<String> for SmokingStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<String> for AlcoholConsumption {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<String> for QualityRating {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<String> for StressLevel {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SmokingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AlcoholConsumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for QualityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_deserialize_as_unspecified() {
        let level: ActivityLevel = serde_json::from_str("\"couch_potato\"").unwrap();
        assert_eq!(level, ActivityLevel::Unspecified);
        let smoking: SmokingStatus = serde_json::from_str("\"Heavy\"").unwrap();
        assert_eq!(smoking, SmokingStatus::Heavy);
    }

    #[test]
    fn test_alcohol_none_key() {
        let alcohol: AlcoholConsumption = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(alcohol, AlcoholConsumption::Abstinent);
        assert_eq!(serde_json::to_string(&alcohol).unwrap(), "\"none\"");
    }

    #[test]
    fn test_snake_case_serialization() {
        assert_eq!(
            serde_json::to_string(&ActivityLevel::VeryActive).unwrap(),
            "\"very_active\""
        );
        assert_eq!(
            serde_json::to_string(&StressLevel::VeryHigh).unwrap(),
            "\"very_high\""
        );
    }
}
