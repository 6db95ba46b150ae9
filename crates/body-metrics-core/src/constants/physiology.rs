// ABOUTME: Published coefficients for BMI, body fat, and energy expenditure formulas
// ABOUTME: Defaults for the formula configuration structs in the server crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological formula constants
//!
//! # References
//!
//! - Deurenberg, P., Weststrate, J.A., & Seidell, J.C. (1991). Body mass index as a
//!   measure of body fatness: age- and sex-specific prediction formulas.
//!   *British Journal of Nutrition*, 65(2), 105-114.
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.

/// Centimeters per meter, used to convert height before squaring
pub const CM_PER_M: f64 = 100.0;

/// Body fat estimation from BMI and age (Deurenberg)
pub mod body_fat {
    /// Weight applied to BMI
    pub const BMI_COEF: f64 = 1.20;
    /// Weight applied to age in years
    pub const AGE_COEF: f64 = 0.23;
    /// Constant subtracted for women
    pub const FEMALE_OFFSET: f64 = 5.4;
    /// Constant subtracted for men (10.8 sex term + 5.4)
    pub const MALE_OFFSET: f64 = 16.2;
}

/// Revised Harris-Benedict BMR equation (Roza & Shizgal 1984)
pub mod harris_benedict {
    /// Intercept (kcal/day)
    pub const INTERCEPT: f64 = 88.362;
    /// Weight coefficient (kcal per kg)
    pub const WEIGHT_COEF: f64 = 13.397;
    /// Height coefficient (kcal per cm)
    pub const HEIGHT_COEF: f64 = 4.799;
    /// Age coefficient (kcal per year, subtracted)
    pub const AGE_COEF: f64 = 5.677;
}

/// TDEE activity multipliers
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHTLY_ACTIVE: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATELY_ACTIVE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const VERY_ACTIVE: f64 = 1.725;
    /// Very hard exercise or physical job
    pub const EXTRA_ACTIVE: f64 = 1.9;
}
