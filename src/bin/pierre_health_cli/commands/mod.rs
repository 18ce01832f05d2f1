// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pierre-health-cli
// ABOUTME: Provides assessment scoring, goal progress, and category commands

pub mod categories;
pub mod goal;
pub mod score;
