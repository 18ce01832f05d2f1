// ABOUTME: Assessment submission service for registered users and guests
// ABOUTME: Validates, scores with a RiskScorer, and builds the history chart and dashboard summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::formatters::{AssessmentReport, TextRender};
use crate::logging::AppLogger;
use crate::validation::validate_assessment;
use chrono::{NaiveDate, Utc};
use pierre_health_core::constants::history::{
    AVERAGE_RISK_DECIMAL_PLACES, CHART_ASSESSMENT_LIMIT, RECENT_ASSESSMENT_LIMIT,
    RECENT_GOAL_LIMIT,
};
use pierre_health_core::errors::AppResult;
use pierre_health_core::models::{
    AssessmentInput, AssessmentView, Goal, GoalStatus, GuestAssessment, PersistedAssessment,
    ProfileLookup,
};
use pierre_health_intelligence::{round_decimal, RiskEngine, RiskScorer};
use std::cmp::Reverse;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Shared, thread-safe birth date lookup
pub type SharedProfileLookup = Arc<dyn ProfileLookup + Send + Sync>;

/// Submits assessments and returns them fully scored
///
/// Every submission is scored in full; there is no partial re-scoring.
#[derive(Clone)]
pub struct AssessmentService<S = RiskEngine> {
    scorer: S,
    profiles: Option<SharedProfileLookup>,
    strict_validation: bool,
}

impl AssessmentService<RiskEngine> {
    /// Service scoring with the standard engine as of today
    #[must_use]
    pub const fn new() -> Self {
        Self::with_scorer(RiskEngine::new())
    }
}

impl Default for AssessmentService<RiskEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for AssessmentService<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentService")
            .field("has_profiles", &self.profiles.is_some())
            .field("strict_validation", &self.strict_validation)
            .finish_non_exhaustive()
    }
}

impl<S: RiskScorer> AssessmentService<S> {
    /// Service scoring with a custom scorer
    #[must_use]
    pub const fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            profiles: None,
            strict_validation: false,
        }
    }

    /// Resolve owners' birth dates through `profiles`
    #[must_use]
    pub fn with_profiles(mut self, profiles: SharedProfileLookup) -> Self {
        self.profiles = Some(profiles);
        self
    }

    /// Reject unrecognized lifestyle answers instead of applying defaults
    #[must_use]
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    fn validate(&self, input: &AssessmentInput) -> AppResult<()> {
        validate_assessment(input, self.strict_validation).inspect_err(|error| {
            AppLogger::log_validation_rejected(error.context.field.as_deref(), &error.message);
        })
    }

    /// Profile birth date for `owner`, else whatever the input carries
    fn resolve_birth_date(&self, owner: Uuid, input: &mut AssessmentInput) {
        if let Some(birth_date) = self
            .profiles
            .as_ref()
            .and_then(|profiles| profiles.date_of_birth(owner))
        {
            input.date_of_birth = Some(birth_date);
        }
    }

    /// Validate and score an assessment for a registered user
    ///
    /// # Errors
    ///
    /// Returns a validation error if any measurement is out of range, or if
    /// strict validation is on and a lifestyle answer is unrecognized.
    pub fn submit(
        &self,
        owner: Uuid,
        mut input: AssessmentInput,
    ) -> AppResult<PersistedAssessment> {
        self.validate(&input).map_err(|e| e.with_user_id(owner))?;
        self.resolve_birth_date(owner, &mut input);

        let now = Utc::now();
        let assessment = PersistedAssessment {
            id: Uuid::new_v4(),
            user_id: owner,
            created_at: now,
            updated_at: now,
            assessment: self.scorer.process(&input),
        };

        AppLogger::log_assessment_scored(
            assessment.id,
            Some(owner),
            assessment.scores().overall_risk_score,
            assessment.scores().risk_level,
        );
        Ok(assessment)
    }

    /// Validate and score an assessment for an anonymous visitor
    ///
    /// `birth_date`, when given, replaces any birth date in the input.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`AssessmentService::submit`].
    pub fn submit_guest(
        &self,
        mut input: AssessmentInput,
        birth_date: Option<NaiveDate>,
    ) -> AppResult<GuestAssessment> {
        self.validate(&input)?;
        if birth_date.is_some() {
            input.date_of_birth = birth_date;
        }

        let assessment = GuestAssessment {
            session_key: Uuid::new_v4(),
            created_at: Utc::now(),
            assessment: self.scorer.process(&input),
        };

        AppLogger::log_assessment_scored(
            assessment.session_key,
            None,
            assessment.scores().overall_risk_score,
            assessment.scores().risk_level,
        );
        Ok(assessment)
    }

    /// Replace the input of a stored assessment and score it again
    ///
    /// # Errors
    ///
    /// Returns a validation error and leaves `existing` untouched when the new
    /// input is rejected.
    pub fn rescore(
        &self,
        existing: &mut PersistedAssessment,
        mut input: AssessmentInput,
    ) -> AppResult<()> {
        self.validate(&input)
            .map_err(|e| e.with_user_id(existing.user_id))?;
        self.resolve_birth_date(existing.user_id, &mut input);

        existing.assessment = self.scorer.process(&input);
        existing.updated_at = Utc::now();
        Ok(())
    }
}

/// Chart feed of a user's assessment history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskHistoryChart {
    /// Submission dates, `YYYY-MM-DD`
    pub labels: Vec<String>,
    /// Overall scores
    pub overall: Vec<u8>,
    /// Cardiovascular sub-scores
    pub cardiovascular: Vec<u8>,
    /// Diabetes sub-scores
    pub diabetes: Vec<u8>,
    /// Lifestyle sub-scores
    pub lifestyle: Vec<u8>,
}

/// Build the history chart from a user's assessments
///
/// Takes the oldest assessments first, up to the chart limit, in ascending
/// submission order. Input order does not matter.
#[must_use]
pub fn history_chart<V: AssessmentView>(assessments: &[V]) -> RiskHistoryChart {
    let mut ordered: Vec<&V> = assessments.iter().collect();
    ordered.sort_by_key(|assessment| assessment.created_at());
    ordered.truncate(CHART_ASSESSMENT_LIMIT);

    let mut chart = RiskHistoryChart::default();
    for assessment in ordered {
        let scores = assessment.scores();
        chart
            .labels
            .push(assessment.created_at().format("%Y-%m-%d").to_string());
        chart.overall.push(scores.overall_risk_score);
        chart.cardiovascular.push(scores.cardiovascular_risk);
        chart.diabetes.push(scores.diabetes_risk);
        chart.lifestyle.push(scores.lifestyle_risk);
    }
    chart
}

impl TextRender for RiskHistoryChart {
    fn render_text(&self) -> String {
        let rows = self
            .labels
            .iter()
            .zip(&self.overall)
            .zip(&self.cardiovascular)
            .zip(&self.diabetes)
            .zip(&self.lifestyle)
            .map(|((((label, overall), cardiovascular), diabetes), lifestyle)| {
                format!(
                    "{label:<10}  {overall:>7}  {cardiovascular:>6}  {diabetes:>8}  {lifestyle:>9}\n"
                )
            });

        std::iter::once("date        overall  cardio  diabetes  lifestyle\n".to_owned())
            .chain(rows)
            .collect()
    }
}

/// One user's dashboard: totals, average risk, and the most recent items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Number of assessments on record
    pub total_assessments: usize,
    /// Mean overall risk to one decimal, absent with no assessments
    pub average_risk: Option<f64>,
    /// Most recent assessment
    pub latest_assessment: Option<AssessmentReport>,
    /// Most recent assessments, newest first
    pub recent_assessments: Vec<AssessmentReport>,
    /// Most recently created active goals, newest first
    pub active_goals: Vec<Goal>,
}

/// Summarise one user's assessments and goals for the dashboard
///
/// Both slices are expected to belong to the same user and may be in any
/// order. Paused, completed and cancelled goals are left out.
#[must_use]
pub fn dashboard_summary<V: AssessmentView>(
    assessments: &[V],
    goals: &[Goal],
) -> DashboardSummary {
    let average_risk = (!assessments.is_empty()).then(|| {
        let total: u64 = assessments
            .iter()
            .map(|assessment| u64::from(assessment.scores().overall_risk_score))
            .sum();
        round_decimal(
            total as f64 / assessments.len() as f64,
            AVERAGE_RISK_DECIMAL_PLACES,
        )
    });

    let mut newest: Vec<&V> = assessments.iter().collect();
    newest.sort_by_key(|assessment| Reverse(assessment.created_at()));
    let recent_assessments: Vec<AssessmentReport> = newest
        .into_iter()
        .take(RECENT_ASSESSMENT_LIMIT)
        .map(|assessment| AssessmentReport::from_view(assessment))
        .collect();

    let mut active_goals: Vec<Goal> = goals
        .iter()
        .filter(|goal| goal.status == GoalStatus::Active)
        .cloned()
        .collect();
    active_goals.sort_by_key(|goal| Reverse(goal.created_at));
    active_goals.truncate(RECENT_GOAL_LIMIT);

    DashboardSummary {
        total_assessments: assessments.len(),
        average_risk,
        latest_assessment: recent_assessments.first().cloned(),
        recent_assessments,
        active_goals,
    }
}

impl TextRender for DashboardSummary {
    fn render_text(&self) -> String {
        let average = self
            .average_risk
            .map_or_else(|| "n/a".to_owned(), |value| format!("{value:.1}"));
        let latest = self.latest_assessment.as_ref().map_or_else(
            || "none".to_owned(),
            |report| {
                format!(
                    "{}/100 ({})",
                    report.overall_risk_score,
                    report.risk_level.display_label()
                )
            },
        );

        let mut lines = vec![
            format!("Assessments: {}", self.total_assessments),
            format!("Average overall risk: {average}"),
            format!("Latest: {latest}"),
            "Recent assessments:".to_owned(),
        ];
        lines.extend(self.recent_assessments.iter().map(|report| {
            format!(
                "- {}  {}/100 ({})",
                report.created_at.format("%Y-%m-%d"),
                report.overall_risk_score,
                report.risk_level.display_label()
            )
        }));
        lines.push("Active goals:".to_owned());
        lines.extend(self.active_goals.iter().map(|goal| {
            format!(
                "- {}: {} ({}%)",
                goal.goal_type.label(),
                goal.title,
                goal.progress
            )
        }));

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}
