// ABOUTME: Pierre health CLI - score assessments, derive goal progress, and show categories
// ABOUTME: Reads JSON inputs from disk and writes JSON, text, or TOON results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Score one assessment as a guest, with a birth date for the age factor
//! pierre-health-cli score --input assessment.json --birth-date 1970-05-01 --format text
//!
//! # Score an array of assessments in parallel
//! pierre-health-cli score-batch --input assessments.json
//!
//! # Chart feed from stored assessments
//! pierre-health-cli history --input stored.json
//!
//! # Dashboard summary from stored assessments and goals
//! pierre-health-cli dashboard --input stored.json --goals goals.json
//!
//! # Derive goal progress from free-text values
//! pierre-health-cli goal-progress --target 100 --current 75.5
//!
//! # BMI and blood pressure categories
//! pierre-health-cli categories --height 175 --weight 70 --systolic 128 --diastolic 79
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pierre_health_risk::config::{AppConfig, LogLevel};
use pierre_health_risk::formatters::OutputFormat;
use pierre_health_risk::logging::LoggingConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pierre-health-cli",
    about = "Pierre health risk assessment CLI",
    long_about = "Score health risk self-assessments, derive goal progress, and show BMI and blood pressure categories."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format: json, text, or toon (defaults to PIERRE_HEALTH_OUTPUT_FORMAT)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Reject unrecognized lifestyle answers instead of applying defaults
    #[arg(long, global = true)]
    strict: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Score one assessment as a guest
    Score {
        /// JSON file holding one assessment
        #[arg(long)]
        input: PathBuf,

        /// Date of birth (YYYY-MM-DD) for the age contribution
        #[arg(long)]
        birth_date: Option<NaiveDate>,
    },

    /// Score a JSON array of assessments in parallel
    ScoreBatch {
        /// JSON file holding an array of assessments
        #[arg(long)]
        input: PathBuf,
    },

    /// Build the history chart feed from stored assessments
    History {
        /// JSON file holding an array of stored assessments
        #[arg(long)]
        input: PathBuf,
    },

    /// Summarise stored assessments and goals for the dashboard
    Dashboard {
        /// JSON file holding an array of stored assessments
        #[arg(long)]
        input: PathBuf,

        /// JSON file holding an array of goals
        #[arg(long)]
        goals: Option<PathBuf>,
    },

    /// Derive goal progress from target and current values
    GoalProgress {
        /// Target value text, e.g. "70"
        #[arg(long)]
        target: String,

        /// Current value text
        #[arg(long)]
        current: String,

        /// Progress kept when the values are not numeric
        #[arg(long, default_value = "0")]
        existing: u8,
    },

    /// Show BMI and blood pressure categories
    Categories {
        /// Height in centimeters
        #[arg(long)]
        height: Option<f64>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// Systolic blood pressure
        #[arg(long)]
        systolic: u16,

        /// Diastolic blood pressure
        #[arg(long)]
        diastolic: u16,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if cli.verbose {
        config.log_level = LogLevel::Debug;
    }
    if cli.strict {
        config.strict_validation = true;
    }
    if let Some(format) = cli.format.as_deref() {
        config.output_format = OutputFormat::from_str_param(format);
    }

    LoggingConfig::from_env()
        .with_environment(config.environment)
        .with_level(config.log_level)
        .init()?;
    config.log_summary();

    match cli.command {
        Command::Score { input, birth_date } => {
            commands::score::score(&config, &input, birth_date)?;
        }
        Command::ScoreBatch { input } => {
            commands::score::score_batch(&config, &input)?;
        }
        Command::History { input } => {
            commands::score::history(&config, &input)?;
        }
        Command::Dashboard { input, goals } => {
            commands::score::dashboard(&config, &input, goals.as_deref())?;
        }
        Command::GoalProgress {
            target,
            current,
            existing,
        } => {
            commands::goal::progress(&config, &target, &current, existing)?;
        }
        Command::Categories {
            height,
            weight,
            systolic,
            diastolic,
        } => {
            commands::categories::show(&config, height, weight, systolic, diastolic)?;
        }
    }

    Ok(())
}
