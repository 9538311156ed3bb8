// ABOUTME: Criterion benchmarks for the prediction analyzers and the generate-all path
// ABOUTME: Measures analyzer cost over growing series and end-to-end generation on in-memory SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for activity analytics.
//!
//! The analyzers are pure, so they are measured directly over synthetic series.
//! The generate-all benchmark includes the activity fetch and four upserts.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    missing_docs
)]

use chrono::{Duration, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_predictions::database::repositories::{
    ActivityRepository, ActivityRepositoryImpl, PredictionStoreImpl,
};
use pierre_predictions::database::Database;
use pierre_predictions::intelligence::{
    ActivityAnalyzer, AnomalyDetector, GoalPredictor, InsightGenerator, TrendForecaster,
};
use pierre_predictions::models::{ActivityRecord, ActivitySeries};
use pierre_predictions::services::PredictionManager;
use std::sync::Arc;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Series lengths in days: one week, the analysis window, and a quarter
const SERIES_DAYS: [usize; 3] = [7, 30, 90];

/// Deterministic daily records with a weekly rhythm and a slow upward drift
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_records(user_id: Uuid, end: NaiveDate, days: usize) -> Vec<ActivityRecord> {
    (0..days)
        .map(|index| {
            let date = end - Duration::days((days - 1 - index) as i64);
            let steps = 6000 + ((index * 733) % 4000) as u32 + (index as u32) * 20;
            ActivityRecord::new(
                user_id,
                date,
                steps,
                f64::from(steps) / 1400.0,
                steps / 250,
            )
        })
        .collect()
}

fn bench_analyzer<A: ActivityAnalyzer>(c: &mut Criterion, name: &str, analyzer: &A) {
    let mut group = c.benchmark_group(name);
    let end = Utc::now().date_naive();

    for days in SERIES_DAYS {
        let series = ActivitySeries::new(generate_records(Uuid::new_v4(), end, days));
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("analyze", days), &series, |b, series| {
            b.iter(|| analyzer.analyze(black_box(series)));
        });
    }

    group.finish();
}

fn bench_analyzers(c: &mut Criterion) {
    bench_analyzer(c, "goal_prediction", &GoalPredictor::default());
    bench_analyzer(c, "anomaly_detection", &AnomalyDetector::new());
    bench_analyzer(c, "trend_forecast", &TrendForecaster::new());
    bench_analyzer(c, "insight_generation", &InsightGenerator::default());
}

fn bench_generate_all(c: &mut Criterion) {
    let runtime = Runtime::new().expect("Failed to create tokio runtime");
    let user_id = Uuid::new_v4();

    let manager = runtime.block_on(async {
        let database = Database::new("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        let activities = Arc::new(ActivityRepositoryImpl::new(database.clone()));
        activities
            .upsert_activities(&generate_records(user_id, Utc::now().date_naive(), 30))
            .await
            .expect("Failed to seed activity records");
        PredictionManager::new(activities, Arc::new(PredictionStoreImpl::new(database)))
    });

    c.bench_function("generate_all_30_days", |b| {
        b.to_async(&runtime)
            .iter(|| async { manager.generate_all(black_box(user_id)).await });
    });
}

criterion_group!(benches, bench_analyzers, bench_generate_all);
criterion_main!(benches);
