// ABOUTME: Metrics calculator combining query validation with the body composition formulas
// ABOUTME: One validation gate then one formula per calculator, results rounded to hundredths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Calculator
//!
//! Turns a raw measurement input (string fields exactly as they arrive in a
//! query string) into a validated calculation. Every calculator either fully
//! succeeds or fails with a single `InvalidInput` error; nothing is partially
//! computed.

use super::body_composition::{
    calculate_bmi, calculate_body_fat, calculate_calories_burned, calculate_harris_benedict,
    calculate_ideal_weight, calculate_tdee, is_positive_measurement, round_to_hundredths,
};
use crate::config::formulas::FormulaConfig;
use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use body_metrics_core::models::{ActivityLevel, Gender};
use serde::{Deserialize, Serialize};

/// Parse an optional raw field as a finite number
///
/// Surrounding whitespace is ignored. Absent or blank fields, partial numbers
/// such as `"70kg"`, and non-finite values all yield `None`.
#[must_use]
pub fn parse_measurement(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn require_positive(raw: Option<&str>, message: &'static str) -> AppResult<f64> {
    parse_measurement(raw)
        .filter(|value| is_positive_measurement(*value))
        .ok_or_else(|| AppError::invalid_input(message))
}

/// Formula results that overflow `f64` are reported as invalid input
fn require_finite(value: f64, message: &'static str) -> AppResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::invalid_input(message))
    }
}

/// BMI measurement input
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BmiRequest {
    /// Height in centimeters
    pub height: Option<String>,
    /// Weight in kilograms
    pub weight: Option<String>,
}

/// Body fat measurement input
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BodyFatRequest {
    /// Age in years
    pub age: Option<String>,
    /// `male` or `female`
    pub gender: Option<String>,
    /// Body Mass Index
    pub bmi: Option<String>,
}

/// Ideal weight measurement input
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IdealWeightRequest {
    /// Body fat percentage
    #[serde(rename = "bodyFat")]
    pub body_fat: Option<String>,
    /// Weight in kilograms
    pub weight: Option<String>,
}

/// Calories burned measurement input
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CaloriesBurnedRequest {
    /// Weight in kilograms
    pub weight: Option<String>,
    /// Height in centimeters
    pub height: Option<String>,
    /// Age in years
    pub age: Option<String>,
    /// One of the five activity levels
    #[serde(rename = "activityLevel")]
    pub activity_level: Option<String>,
    /// Daily caloric intake in kcal; absent means zero
    pub calories: Option<String>,
}

/// BMI result plus the weight echoed back for chaining
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    /// BMI rounded to hundredths
    pub bmi: f64,
    /// Weight exactly as parsed
    pub weight: f64,
}

/// Body fat result plus the BMI echoed back for chaining
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFatResult {
    /// Body fat percentage rounded to hundredths
    pub body_fat: f64,
    /// Input BMI rounded to hundredths
    pub bmi: f64,
}

/// Ideal weight result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealWeightResult {
    /// Ideal weight in kilograms rounded to hundredths
    pub ideal_weight: f64,
}

/// Calories burned result with intermediate energy values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaloriesBurnedResult {
    /// Unrounded basal metabolic rate
    pub bmr: f64,
    /// Unrounded total daily energy expenditure
    pub tdee: f64,
    /// Calories burned rounded to hundredths, never negative
    pub calories_burned: f64,
}

/// Stateless calculator over a fixed set of formula coefficients
#[derive(Debug, Clone, Default)]
pub struct MetricsCalculator {
    config: FormulaConfig,
}

impl MetricsCalculator {
    /// Create a calculator using the given coefficients
    #[must_use]
    pub const fn new(config: FormulaConfig) -> Self {
        Self { config }
    }

    /// Evaluate BMI
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if height or weight is missing, malformed, or not positive
    pub fn bmi(&self, request: &BmiRequest) -> AppResult<BmiResult> {
        let message = messages::INVALID_HEIGHT_OR_WEIGHT;
        let height = require_positive(request.height.as_deref(), message)?;
        let weight = require_positive(request.weight.as_deref(), message)?;

        let bmi = require_finite(calculate_bmi(height, weight)?, message)?;
        Ok(BmiResult {
            bmi: round_to_hundredths(bmi),
            weight,
        })
    }

    /// Evaluate body fat percentage
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if age or BMI is missing, malformed, or not positive,
    /// or if gender is not exactly `male` or `female`
    pub fn body_fat(&self, request: &BodyFatRequest) -> AppResult<BodyFatResult> {
        let message = messages::INVALID_AGE_GENDER_OR_BMI;
        let age = require_positive(request.age.as_deref(), message)?;
        let gender: Gender = request
            .gender
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| AppError::invalid_input(message))?;
        let bmi = require_positive(request.bmi.as_deref(), message)?;

        let body_fat = require_finite(
            calculate_body_fat(age, gender, bmi, &self.config.body_fat)?,
            message,
        )?;
        Ok(BodyFatResult {
            body_fat: round_to_hundredths(body_fat),
            bmi: round_to_hundredths(bmi),
        })
    }

    /// Evaluate ideal weight
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if body fat or weight is missing, malformed, or not positive
    pub fn ideal_weight(&self, request: &IdealWeightRequest) -> AppResult<IdealWeightResult> {
        let message = messages::INVALID_WEIGHT_OR_BODY_FAT;
        let body_fat = require_positive(request.body_fat.as_deref(), message)?;
        let weight = require_positive(request.weight.as_deref(), message)?;

        let ideal_weight = require_finite(calculate_ideal_weight(body_fat, weight)?, message)?;
        Ok(IdealWeightResult {
            ideal_weight: round_to_hundredths(ideal_weight),
        })
    }

    /// Evaluate calories burned
    ///
    /// Numeric measurements are validated before the activity level, matching
    /// the order callers see in error messages.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if weight, height, or age is missing, malformed, or not
    /// positive; if the activity level is unknown; or if a supplied intake is not a
    /// finite non-negative number
    pub fn calories_burned(
        &self,
        request: &CaloriesBurnedRequest,
    ) -> AppResult<CaloriesBurnedResult> {
        let message = messages::INVALID_WEIGHT_HEIGHT_OR_AGE;
        let weight = require_positive(request.weight.as_deref(), message)?;
        let height = require_positive(request.height.as_deref(), message)?;
        let age = require_positive(request.age.as_deref(), message)?;

        let activity_level: ActivityLevel = request
            .activity_level
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| AppError::invalid_input(messages::INVALID_ACTIVITY_LEVEL))?;

        let intake = parse_intake(request.calories.as_deref())?;

        let bmr = require_finite(
            calculate_harris_benedict(weight, height, age, &self.config.harris_benedict)?,
            message,
        )?;
        let tdee = require_finite(
            calculate_tdee(bmr, activity_level, &self.config.activity_factors),
            message,
        )?;

        Ok(CaloriesBurnedResult {
            bmr,
            tdee,
            calories_burned: round_to_hundredths(calculate_calories_burned(tdee, intake)),
        })
    }
}

/// Daily intake: absent or blank is zero, anything else must be a finite non-negative number
fn parse_intake(raw: Option<&str>) -> AppResult<f64> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0.0),
        Some(value) => parse_measurement(Some(value))
            .filter(|intake| *intake >= 0.0)
            .ok_or_else(|| AppError::invalid_input(messages::INVALID_CALORIC_INTAKE)),
    }
}
