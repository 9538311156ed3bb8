// ABOUTME: Constants re-exported from pierre-core for use across the service
// ABOUTME: Service identity, environment variable names, defaults, page limits, and the date format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_core::constants::{database, defaults, env_vars, limits, service_names};
