// ABOUTME: User-facing validation messages for the calculator endpoints
// ABOUTME: Shared by evaluators and tests so wording stays in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// BMI endpoint: height or weight missing, malformed, or not positive
pub const INVALID_HEIGHT_OR_WEIGHT: &str = "Invalid height or weight values.";
/// Body fat endpoint: age, gender, or BMI rejected
pub const INVALID_AGE_GENDER_OR_BMI: &str = "Invalid age, gender, or BMI value.";
/// Ideal weight endpoint: weight or body fat rejected
pub const INVALID_WEIGHT_OR_BODY_FAT: &str = "Invalid weight or body fat percentage value.";
/// Calories endpoint: numeric body measurements rejected
pub const INVALID_WEIGHT_HEIGHT_OR_AGE: &str = "Invalid weight, height, or age value.";
/// Calories endpoint: activity level not in the enumerated set
pub const INVALID_ACTIVITY_LEVEL: &str = "Invalid activity level value.";
/// Calories endpoint: intake present but not a finite non-negative number
pub const INVALID_CALORIC_INTAKE: &str = "Invalid daily caloric intake value.";
