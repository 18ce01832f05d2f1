// ABOUTME: Domain service layer wrapping the scoring and progress engines
// ABOUTME: Validates input, resolves profile data, and stamps identifiers and timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services sit between an outer surface (CLI, web forms, storage) and the
//! pure engines. They own validation and bookkeeping; the engines own the
//! scoring rules.

/// Assessment submission, re-scoring, the history chart feed, and the dashboard summary
pub mod assessments;

/// Goal creation and editing with progress re-derivation
pub mod goals;

pub use assessments::{
    dashboard_summary, history_chart, AssessmentService, DashboardSummary, RiskHistoryChart,
};
pub use goals::GoalTracker;
