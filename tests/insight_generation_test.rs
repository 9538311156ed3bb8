// ABOUTME: Tests for rule-based insight generation
// ABOUTME: Weekend/weekday split, consistency bands, week-over-week progress, and the three-insight cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, NaiveDate};
use common::{anchor_date, series_from_steps};
use pierre_predictions::intelligence::{
    ActivityAnalyzer, AnalysisReport, InsightGenerator, InsightReport, InsightType,
};
use pierre_predictions::models::{ActivitySeries, PredictionType};

/// Sunday closing two full ISO weeks that start on the anchor Monday
fn two_week_end() -> NaiveDate {
    anchor_date() + Duration::days(13)
}

/// Two weeks of Monday-Friday and Saturday-Sunday values
fn split_weeks(weekday: u32, weekend: u32) -> ActivitySeries {
    let week: Vec<u32> = [weekday; 5].into_iter().chain([weekend; 2]).collect();
    let steps: Vec<u32> = week.iter().chain(week.iter()).copied().collect();
    series_from_steps(two_week_end(), &steps)
}

fn week_over_week(previous: u32, recent: u32) -> ActivitySeries {
    let steps: Vec<u32> = [previous; 7].into_iter().chain([recent; 7]).collect();
    series_from_steps(two_week_end(), &steps)
}

#[test]
fn test_lower_weekend_activity() {
    let report = InsightGenerator::default().analyze(&split_weeks(10_000, 2000)).unwrap();

    assert_eq!(report.insights.len(), 3);
    assert!(report
        .insights
        .iter()
        .all(|insight| insight.insight_type == InsightType::WeekdayPattern));
    assert_eq!(
        report.insights[0].message,
        "Your steps are significantly lower on weekends. Consider planning active weekend activities to maintain consistency."
    );
    assert_eq!(report.insights[0].data["metric"], "steps");
    assert_eq!(report.insights[0].data["weekday_average"], 10_000.0);
    assert_eq!(report.insights[0].data["weekend_average"], 2000.0);
}

#[test]
fn test_higher_weekend_activity() {
    let insights = InsightGenerator::weekday_patterns(&split_weeks(2000, 10_000));

    assert_eq!(insights.len(), 3);
    assert_eq!(
        insights[0].message,
        "You're much more active on weekends than weekdays. Try to incorporate more activity into your work days."
    );
    // The metric is only carried in the payload
    assert_eq!(insights[2].data["metric"], "active_minutes");
}

#[test]
fn test_balanced_week_has_no_weekday_pattern() {
    let insights = InsightGenerator::weekday_patterns(&split_weeks(8000, 9000));
    assert!(insights.is_empty());
}

#[test]
fn test_insights_are_capped_in_rule_order() {
    let series = split_weeks(2000, 10_000);
    let generator = InsightGenerator::default();

    // The weekend split also makes every metric highly variable
    let variability = generator.consistency(&series);
    assert_eq!(variability.len(), 3);
    assert!(variability[0].message.contains("vary significantly"));

    let report = generator.analyze(&series).unwrap();
    assert_eq!(report.insights.len(), 3);
    assert!(report
        .insights
        .iter()
        .all(|insight| insight.insight_type == InsightType::WeekdayPattern));
}

#[test]
fn test_consistently_meeting_goals() {
    let series = series_from_steps(two_week_end(), &[12_000; 14]);
    let report = InsightGenerator::default().analyze(&series).unwrap();

    assert_eq!(report.insights.len(), 3);
    let first = &report.insights[0];
    assert_eq!(first.insight_type, InsightType::Consistency);
    assert_eq!(
        first.message,
        "Great job maintaining consistent steps! You're consistently meeting or exceeding goals."
    );
    assert_eq!(first.data["recommended"], 10_000.0);
    assert_eq!(first.data["variation_coefficient"], 0.0);
}

#[test]
fn test_consistently_below_target() {
    let series = series_from_steps(two_week_end(), &[3000; 14]);
    let insights = InsightGenerator::default().consistency(&series);

    assert_eq!(insights.len(), 3);
    assert_eq!(
        insights[0].message,
        "You're consistently below target for steps. Try gradually increasing your daily activity."
    );
    assert_eq!(insights[0].data["average"], 3000.0);
}

#[test]
fn test_consistent_between_bands_is_silent() {
    // 8000 steps is above 70% of the goal but below the goal itself
    let series = series_from_steps(two_week_end(), &[8000; 14]);
    let insights = InsightGenerator::default().consistency(&series);
    assert!(insights
        .iter()
        .all(|insight| insight.data["metric"] != "steps"));
}

#[test]
fn test_week_over_week_improvement() {
    let report = InsightGenerator::default()
        .analyze(&week_over_week(5000, 8000))
        .unwrap();

    assert_eq!(report.insights.len(), 3);
    assert!(report
        .insights
        .iter()
        .all(|insight| insight.insight_type == InsightType::Progress));
    assert_eq!(
        report.insights[0].message,
        "Great improvement! Your steps have increased by 60% compared to the previous week."
    );
    assert_eq!(report.insights[0].data["change_percent"], 60.0);
    // 16 -> 26 active minutes is a 62.5% change
    assert!(report.insights[2].message.contains("increased by 63%"));
}

#[test]
fn test_week_over_week_decline() {
    let insights = InsightGenerator::progress(&week_over_week(8000, 5000));

    assert_eq!(
        insights[0].message,
        "Your steps have decreased by 38% compared to the previous week. Try to get back on track!"
    );
    assert_eq!(insights[0].data["recent_average"], 5000.0);
    assert_eq!(insights[0].data["previous_average"], 8000.0);
}

#[test]
fn test_progress_skipped_without_previous_week() {
    let one_week = series_from_steps(two_week_end(), &[9000; 7]);
    assert!(InsightGenerator::progress(&one_week).is_empty());

    let idle_then_active = week_over_week(0, 8000);
    assert!(InsightGenerator::progress(&idle_then_active).is_empty());
}

#[test]
fn test_fewer_than_seven_records_yields_none() {
    let series = series_from_steps(two_week_end(), &[9000; 6]);
    assert!(InsightGenerator::default().analyze(&series).is_none());
}

#[test]
fn test_empty_report_description() {
    let report = InsightReport { insights: vec![] };
    assert_eq!(
        report.description(),
        "Not enough data yet to generate personalized insights."
    );
}

#[test]
fn test_insight_serializes_type_tag() {
    let report = InsightGenerator::default()
        .analyze(&split_weeks(10_000, 2000))
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["insights"][0]["type"], "weekday_pattern");
    assert!(json["insights"][0].get("insight_type").is_none());
}

#[test]
fn test_analyzer_metadata() {
    let generator = InsightGenerator::default();
    assert_eq!(generator.prediction_type(), PredictionType::Insight);
    assert_eq!(generator.lookback_days(), 30);
}
