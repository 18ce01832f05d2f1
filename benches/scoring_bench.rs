// ABOUTME: Criterion benchmarks for health risk scoring and goal progress derivation
// ABOUTME: Measures single assessment scoring, parallel batch scoring, and progress parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the scoring engines.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_health_risk::intelligence::{GoalProgressCalculator, RiskEngine, RiskScorer};
use pierre_health_risk::models::{
    ActivityLevel, AlcoholConsumption, AssessmentInput, MedicalHistory, QualityRating,
    SmokingStatus, StressLevel,
};

const BATCH_SIZES: [usize; 3] = [10, 100, 1_000];

fn reference_engine() -> RiskEngine {
    NaiveDate::from_ymd_opt(2025, 6, 1).map_or_else(RiskEngine::new, RiskEngine::as_of)
}

/// Deterministic spread of inputs across the scoring tables
#[allow(clippy::cast_possible_wrap)]
fn generate_inputs(count: usize) -> Vec<AssessmentInput> {
    let activity = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];
    let smoking = [
        SmokingStatus::Never,
        SmokingStatus::Former,
        SmokingStatus::Occasional,
        SmokingStatus::Regular,
        SmokingStatus::Heavy,
    ];
    let quality = [
        QualityRating::Poor,
        QualityRating::Fair,
        QualityRating::Good,
        QualityRating::Excellent,
    ];

    (0..count)
        .map(|index| AssessmentInput {
            height_cm: Some(150.0 + (index % 50) as f64),
            weight_kg: Some(50.0 + (index % 70) as f64),
            waist_cm: Some(70.0 + (index % 45) as f64),
            systolic_bp: 100 + (index % 90) as u16,
            diastolic_bp: 60 + (index % 50) as u16,
            blood_sugar: (index % 3 != 0).then(|| 80.0 + (index % 60) as f64),
            cholesterol_total: Some(150 + (index % 120) as u16),
            cholesterol_hdl: Some(30 + (index % 40) as u16),
            activity_level: activity[index % activity.len()],
            smoking_status: smoking[index % smoking.len()],
            alcohol_consumption: if index % 7 == 0 {
                AlcoholConsumption::Heavy
            } else {
                AlcoholConsumption::Occasional
            },
            diet_quality: quality[index % quality.len()],
            sleep_quality: quality[(index + 1) % quality.len()],
            stress_level: if index % 2 == 0 {
                StressLevel::High
            } else {
                StressLevel::Low
            },
            medical_history: MedicalHistory {
                family_history_heart: index % 4 == 0,
                family_history_diabetes: index % 5 == 0,
                ..MedicalHistory::default()
            },
            date_of_birth: NaiveDate::from_ymd_opt(1940 + (index % 60) as i32, 1, 1),
            ..AssessmentInput::default()
        })
        .collect()
}

fn bench_score_single(c: &mut Criterion) {
    let engine = reference_engine();
    let inputs = generate_inputs(1);

    c.bench_function("score_single_assessment", |b| {
        b.iter(|| engine.score(black_box(&inputs[0])));
    });
}

fn bench_score_batch(c: &mut Criterion) {
    let engine = reference_engine();
    let mut group = c.benchmark_group("score_batch");

    for size in BATCH_SIZES {
        let inputs = generate_inputs(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("parallel", size), &inputs, |b, inputs| {
            b.iter(|| engine.score_batch(black_box(inputs)));
        });
        group.bench_with_input(BenchmarkId::new("sequential", size), &inputs, |b, inputs| {
            b.iter(|| {
                inputs
                    .iter()
                    .map(|input| engine.score(black_box(input)))
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

fn bench_goal_progress(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_progress");
    group.bench_function("numeric", |b| {
        b.iter(|| GoalProgressCalculator::derive_progress(black_box("100"), black_box("75.5"), 0));
    });
    group.bench_function("non_numeric", |b| {
        b.iter(|| {
            GoalProgressCalculator::derive_progress(black_box("100 kg"), black_box("70 kg"), 25)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_score_single,
    bench_score_batch,
    bench_goal_progress
);
criterion_main!(benches);
