// ABOUTME: Tracked activity metrics and a fixed-shape container keyed by metric
// ABOUTME: PerMetric always carries steps, distance_km, and active_minutes entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily activity metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Step count
    Steps,
    /// Distance covered in kilometres
    DistanceKm,
    /// Minutes of moderate or vigorous activity
    ActiveMinutes,
}

impl Metric {
    /// Every metric, in reporting order
    pub const ALL: [Self; 3] = [Self::Steps, Self::DistanceKm, Self::ActiveMinutes];

    /// Wire/storage key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::DistanceKm => "distance_km",
            Self::ActiveMinutes => "active_minutes",
        }
    }

    /// Name used in user-facing sentences
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::DistanceKm => "distance km",
            Self::ActiveMinutes => "active minutes",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per [`Metric`]
///
/// Serializes as `{"steps": .., "distance_km": .., "active_minutes": ..}` so every
/// key is always present, even for an empty series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerMetric<T> {
    /// Step count value
    pub steps: T,
    /// Distance value
    pub distance_km: T,
    /// Active minutes value
    pub active_minutes: T,
}

impl<T> PerMetric<T> {
    /// Build by evaluating `f` for each metric in reporting order
    pub fn from_fn(mut f: impl FnMut(Metric) -> T) -> Self {
        Self {
            steps: f(Metric::Steps),
            distance_km: f(Metric::DistanceKm),
            active_minutes: f(Metric::ActiveMinutes),
        }
    }

    /// Borrow the value for `metric`
    #[must_use]
    pub const fn get(&self, metric: Metric) -> &T {
        match metric {
            Metric::Steps => &self.steps,
            Metric::DistanceKm => &self.distance_km,
            Metric::ActiveMinutes => &self.active_minutes,
        }
    }

    /// Transform every value, keeping the metric association
    pub fn map<U>(self, mut f: impl FnMut(Metric, T) -> U) -> PerMetric<U> {
        PerMetric {
            steps: f(Metric::Steps, self.steps),
            distance_km: f(Metric::DistanceKm, self.distance_km),
            active_minutes: f(Metric::ActiveMinutes, self.active_minutes),
        }
    }

    /// Iterate `(metric, value)` pairs in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &T)> {
        Metric::ALL.into_iter().map(move |metric| (metric, self.get(metric)))
    }
}

impl<T: Copy> PerMetric<T> {
    /// Copy the value for `metric`
    #[must_use]
    pub const fn value(&self, metric: Metric) -> T {
        *self.get(metric)
    }
}
