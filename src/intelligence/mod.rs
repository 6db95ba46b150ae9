// ABOUTME: Intelligence module for body composition and energy expenditure calculations
// ABOUTME: Pure formula evaluators plus the validating metrics calculator built on them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Closed-form body metrics. Nothing here performs I/O or holds mutable
//! state, so every function is safe to call from any number of requests.

/// BMI, body fat, ideal weight, BMR, TDEE, and calories burned formulas
pub mod body_composition;
/// Validating calculator over raw measurement inputs
pub mod calculator;

pub use body_composition::{format_two_decimals, round_to_hundredths};
pub use calculator::{
    BmiRequest, BmiResult, BodyFatRequest, BodyFatResult, CaloriesBurnedRequest,
    CaloriesBurnedResult, IdealWeightRequest, IdealWeightResult, MetricsCalculator,
};
