// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for body composition formulas and validation messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Published body composition and energy expenditure coefficients
pub mod physiology;
/// Validation messages returned to API callers
pub mod messages;

/// Service identity used in logs and health responses
pub mod service_names {
    /// Binary and service name
    pub const BODY_METRICS_SERVER: &str = "body-metrics-server";
}
