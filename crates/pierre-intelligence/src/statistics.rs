// ABOUTME: Statistics primitives shared by every prediction analyzer
// ABOUTME: Mean, population standard deviation, z-score, OLS slope, and percentage change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: record counts are tiny (at most a few dozen)
#![allow(clippy::float_cmp)] // Exact-zero guards are intentional

use pierre_core::models::{ActivityRecord, Metric, PerMetric};

/// Statistics over activity records
///
/// Every division is guarded: degenerate inputs yield `0.0` instead of `NaN` or a panic.
pub struct ActivityStatistics;

impl ActivityStatistics {
    /// Arithmetic mean of `metric`; `0.0` for no records
    pub fn mean<'a>(records: impl IntoIterator<Item = &'a ActivityRecord>, metric: Metric) -> f64 {
        let (sum, count) = records
            .into_iter()
            .fold((0.0, 0_usize), |(sum, count), record| {
                (sum + record.value(metric), count + 1)
            });

        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }

    /// Population standard deviation (divides by N) around `mean`; `0.0` for fewer than two records
    pub fn std_deviation<'a>(
        records: impl IntoIterator<Item = &'a ActivityRecord>,
        metric: Metric,
        mean: f64,
    ) -> f64 {
        let (squared_diffs, count) =
            records
                .into_iter()
                .fold((0.0, 0_usize), |(total, count), record| {
                    let diff = record.value(metric) - mean;
                    (diff.mul_add(diff, total), count + 1)
                });

        if count < 2 {
            0.0
        } else {
            (squared_diffs / count as f64).sqrt()
        }
    }

    /// Standard deviations a value lies from `mean`
    ///
    /// Returns `0.0` when `std_deviation` is zero, so a perfectly constant baseline
    /// never produces an outlier.
    #[must_use]
    pub fn z_score(value: f64, mean: f64, std_deviation: f64) -> f64 {
        if std_deviation == 0.0 {
            return 0.0;
        }
        (value - mean) / std_deviation
    }

    /// Ordinary least squares slope with index position (0, 1, 2, ...) as x
    ///
    /// `0.0` for fewer than two points or a zero denominator.
    #[must_use]
    pub fn linear_regression_slope(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }

        let n = values.len() as f64;
        let (sum_x, sum_y, sum_xy, sum_xx) = values.iter().enumerate().fold(
            (0.0, 0.0, 0.0, 0.0),
            |(sum_x, sum_y, sum_xy, sum_xx), (index, &y)| {
                let x = index as f64;
                (sum_x + x, sum_y + y, x.mul_add(y, sum_xy), x.mul_add(x, sum_xx))
            },
        );

        let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
        if denominator == 0.0 {
            return 0.0;
        }

        n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator
    }

    /// `(last - first) / first * 100`; `0.0` when `first` is zero
    #[must_use]
    pub fn percentage_change(first: f64, last: f64) -> f64 {
        if first == 0.0 {
            return 0.0;
        }
        (last - first) / first * 100.0
    }

    /// Coefficient of variation; `0.0` when the mean is not positive
    #[must_use]
    pub fn coefficient_of_variation(std_deviation: f64, mean: f64) -> f64 {
        if mean > 0.0 {
            std_deviation / mean
        } else {
            0.0
        }
    }

    /// Mean of every metric; all zero for no records
    pub fn averages<'a, I>(records: I) -> PerMetric<f64>
    where
        I: IntoIterator<Item = &'a ActivityRecord>,
        I::IntoIter: Clone,
    {
        let records = records.into_iter();
        PerMetric::from_fn(|metric| Self::mean(records.clone(), metric))
    }

    /// Population standard deviation of every metric around `averages`
    pub fn std_deviations<'a, I>(records: I, averages: &PerMetric<f64>) -> PerMetric<f64>
    where
        I: IntoIterator<Item = &'a ActivityRecord>,
        I::IntoIter: Clone,
    {
        let records = records.into_iter();
        PerMetric::from_fn(|metric| {
            Self::std_deviation(records.clone(), metric, averages.value(metric))
        })
    }
}
