// ABOUTME: Body composition and energy expenditure formulas with input validation
// ABOUTME: BMI, body fat percentage, ideal weight, Harris-Benedict BMR, TDEE, and calories burned
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Module
//!
//! Closed-form evaluators for the body metrics calculators. Each function
//! validates its inputs once and either returns the raw result or an
//! `InvalidInput` error carrying the message shown to API callers.
//!
//! # Scientific References
//!
//! - Deurenberg, P., et al. (1991). Body mass index as a measure of body fatness.
//!   *British Journal of Nutrition*, 65(2), 105-114.
//!   <https://doi.org/10.1079/BJN19910073>
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>

use crate::config::formulas::{ActivityFactorsConfig, BodyFatConfig, HarrisBenedictConfig};
use crate::constants::messages;
use crate::constants::physiology::CM_PER_M;
use crate::errors::AppError;
use body_metrics_core::models::{ActivityLevel, Gender};

/// True when `value` is a finite number strictly greater than zero
#[must_use]
pub fn is_positive_measurement(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Round half away from zero to two decimal places
///
/// Magnitudes too large to scale by 100 have no fractional digits left and
/// are returned unchanged.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / 100.0;
    // collapse -0.0 so it never renders as "-0.00"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Render a result with exactly two fractional digits
#[must_use]
pub fn format_two_decimals(value: f64) -> String {
    format!("{:.2}", round_to_hundredths(value))
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)^2
///
/// # Errors
///
/// Returns `InvalidInput` if either measurement is not a finite positive number
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Result<f64, AppError> {
    if !is_positive_measurement(height_cm) || !is_positive_measurement(weight_kg) {
        return Err(AppError::invalid_input(messages::INVALID_HEIGHT_OR_WEIGHT));
    }

    let height_m = height_cm / CM_PER_M;
    Ok(weight_kg / (height_m * height_m))
}

/// Estimate body fat percentage from BMI and age
///
/// Formula: `BF% = 1.20 x BMI + 0.23 x age - offset`
/// - Women: offset 5.4
/// - Men: offset 16.2
///
/// The result is not floored: extreme inputs may produce a negative estimate.
///
/// # Reference
/// Deurenberg et al. (1991) DOI: 10.1079/BJN19910073
///
/// # Errors
///
/// Returns `InvalidInput` if age or BMI is not a finite positive number
pub fn calculate_body_fat(
    age: f64,
    gender: Gender,
    bmi: f64,
    config: &BodyFatConfig,
) -> Result<f64, AppError> {
    if !is_positive_measurement(age) || !is_positive_measurement(bmi) {
        return Err(AppError::invalid_input(messages::INVALID_AGE_GENDER_OR_BMI));
    }

    Ok(config.bmi_coef.mul_add(bmi, config.age_coef * age) - config.offset(gender))
}

/// Calculate ideal weight as lean mass
///
/// Formula: `ideal = weight - weight x (body_fat_percent / 100)`
///
/// Body fat above 100% yields a negative value; it is returned as computed.
///
/// # Errors
///
/// Returns `InvalidInput` if either value is not a finite positive number
pub fn calculate_ideal_weight(body_fat_percent: f64, weight_kg: f64) -> Result<f64, AppError> {
    if !is_positive_measurement(body_fat_percent) || !is_positive_measurement(weight_kg) {
        return Err(AppError::invalid_input(messages::INVALID_WEIGHT_OR_BODY_FAT));
    }

    Ok(weight_kg - weight_kg * (body_fat_percent / 100.0))
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// Formula: BMR = 88.362 + (13.397 x `weight_kg`) + (4.799 x `height_cm`) - (5.677 x age)
///
/// # Reference
/// Roza & Shizgal (1984) DOI: 10.1093/ajcn/40.1.168
///
/// # Errors
///
/// Returns `InvalidInput` if any measurement is not a finite positive number
pub fn calculate_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    config: &HarrisBenedictConfig,
) -> Result<f64, AppError> {
    if ![weight_kg, height_cm, age]
        .into_iter()
        .all(is_positive_measurement)
    {
        return Err(AppError::invalid_input(
            messages::INVALID_WEIGHT_HEIGHT_OR_AGE,
        ));
    }

    let weight_component = config.weight_coef * weight_kg;
    let height_component = config.height_coef * height_cm;
    let age_component = config.age_coef * age;

    Ok(config.intercept + weight_component + height_component - age_component)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor(activity_level)
}

/// Calories left to burn after intake, floored at zero
///
/// A caloric intake beyond TDEE reports zero, never a negative value.
#[must_use]
pub fn calculate_calories_burned(tdee: f64, daily_caloric_intake: f64) -> f64 {
    (tdee - daily_caloric_intake).max(0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_bmi_formula() {
        let bmi = calculate_bmi(175.0, 70.0).unwrap();
        assert_close(bmi, 70.0 / (1.75 * 1.75));
        assert_eq!(format_two_decimals(bmi), "22.86");
    }

    #[test]
    fn test_bmi_formula_across_measurements() {
        let heights = [50.0, 120.5, 150.0, 163.2, 175.0, 188.8, 201.0, 250.0];
        let weights = [2.5, 45.0, 58.3, 70.0, 84.75, 110.0, 150.2, 300.0];

        for height in heights {
            for weight in weights {
                let bmi = calculate_bmi(height, weight).unwrap();
                let height_m = height / 100.0;
                assert_eq!(
                    format_two_decimals(bmi),
                    format_two_decimals(weight / (height_m * height_m)),
                    "height {height}, weight {weight}"
                );
                assert!(bmi > 0.0);
            }
        }
    }

    #[test]
    fn test_rounding_keeps_huge_values_finite() {
        assert!(round_to_hundredths(1e307).is_finite());
        assert!((round_to_hundredths(1e307) - 1e307).abs() < f64::EPSILON * 1e307);
        assert!(round_to_hundredths(-f64::MAX).is_finite());
        assert!(!format_two_decimals(1.2e307).contains("inf"));
    }

    #[test]
    fn test_bmi_rejects_non_positive() {
        for (height, weight) in [(0.0, 70.0), (180.0, 0.0), (-1.0, 70.0), (f64::NAN, 70.0)] {
            let err = calculate_bmi(height, weight).unwrap_err();
            assert_eq!(err.message, messages::INVALID_HEIGHT_OR_WEIGHT);
        }
    }

    #[test]
    fn test_body_fat_by_gender() {
        let config = BodyFatConfig::default();
        let female = calculate_body_fat(25.0, Gender::Female, 22.5, &config).unwrap();
        let male = calculate_body_fat(25.0, Gender::Male, 22.5, &config).unwrap();
        assert_eq!(format_two_decimals(female), "27.35");
        assert_eq!(format_two_decimals(male), "16.55");
        assert_close(female - male, 10.8);
    }

    #[test]
    fn test_body_fat_can_be_negative() {
        let value = calculate_body_fat(1.0, Gender::Male, 1.0, &BodyFatConfig::default()).unwrap();
        assert!(value < 0.0);
    }

    #[test]
    fn test_ideal_weight() {
        let ideal = calculate_ideal_weight(25.0, 80.0).unwrap();
        assert_eq!(format_two_decimals(ideal), "60.00");
        assert!(calculate_ideal_weight(0.0, 80.0).is_err());
        assert!(calculate_ideal_weight(25.0, -80.0).is_err());
    }

    #[test]
    fn test_harris_benedict_reference_values() {
        let bmr =
            calculate_harris_benedict(70.0, 175.0, 30.0, &HarrisBenedictConfig::default()).unwrap();
        assert_close(bmr, 1695.667);

        let tdee = calculate_tdee(bmr, ActivityLevel::Sedentary, &ActivityFactorsConfig::default());
        assert_close(tdee, 2034.8004);
        assert_eq!(format_two_decimals(calculate_calories_burned(tdee, 2000.0)), "34.80");
    }

    #[test]
    fn test_calories_burned_clamps_to_zero() {
        assert_close(calculate_calories_burned(2034.8004, 5000.0), 0.0);
        assert_eq!(format_two_decimals(calculate_calories_burned(1500.0, 1500.0)), "0.00");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(format_two_decimals(0.125), "0.13");
        assert_eq!(format_two_decimals(-0.125), "-0.13");
        assert_eq!(format_two_decimals(-0.001), "0.00");
        assert_eq!(format_two_decimals(60.0), "60.00");
    }
}
