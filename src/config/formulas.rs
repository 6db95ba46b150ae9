// ABOUTME: Formula coefficient configuration for body composition and energy expenditure
// ABOUTME: Defaults reproduce the published equations; handlers share one instance via app state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Formula Configuration
//!
//! # Scientific References
//!
//! - Body fat: Deurenberg et al. (1991) DOI: 10.1079/BJN19910073
//! - BMR: Roza & Shizgal (1984) DOI: 10.1093/ajcn/40.1.168
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology

use crate::constants::physiology::{activity_factors, body_fat, harris_benedict};
use body_metrics_core::models::{ActivityLevel, Gender};
use serde::{Deserialize, Serialize};

/// All formula coefficients used by the calculators
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormulaConfig {
    /// Body fat estimation from BMI and age
    pub body_fat: BodyFatConfig,
    /// Revised Harris-Benedict BMR coefficients
    pub harris_benedict: HarrisBenedictConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
}

/// Body fat percentage estimation configuration
///
/// `body_fat = bmi_coef * bmi + age_coef * age - offset(gender)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyFatConfig {
    /// BMI coefficient (1.20)
    pub bmi_coef: f64,
    /// Age coefficient (0.23)
    pub age_coef: f64,
    /// Offset subtracted for men (16.2)
    pub male_offset: f64,
    /// Offset subtracted for women (5.4)
    pub female_offset: f64,
}

impl BodyFatConfig {
    /// Offset subtracted for the given gender
    #[must_use]
    pub const fn offset(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male_offset,
            Gender::Female => self.female_offset,
        }
    }
}

impl Default for BodyFatConfig {
    fn default() -> Self {
        Self {
            bmi_coef: body_fat::BMI_COEF,
            age_coef: body_fat::AGE_COEF,
            male_offset: body_fat::MALE_OFFSET,
            female_offset: body_fat::FEMALE_OFFSET,
        }
    }
}

/// Revised Harris-Benedict BMR configuration
///
/// `bmr = intercept + weight_coef * kg + height_coef * cm - age_coef * years`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarrisBenedictConfig {
    /// Intercept (88.362)
    pub intercept: f64,
    /// Weight coefficient (13.397)
    pub weight_coef: f64,
    /// Height coefficient (4.799)
    pub height_coef: f64,
    /// Age coefficient, subtracted (5.677)
    pub age_coef: f64,
}

impl Default for HarrisBenedictConfig {
    fn default() -> Self {
        Self {
            intercept: harris_benedict::INTERCEPT,
            weight_coef: harris_benedict::WEIGHT_COEF,
            height_coef: harris_benedict::HEIGHT_COEF,
            age_coef: harris_benedict::AGE_COEF,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for the given activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            lightly_active: activity_factors::LIGHTLY_ACTIVE,
            moderately_active: activity_factors::MODERATELY_ACTIVE,
            very_active: activity_factors::VERY_ACTIVE,
            extra_active: activity_factors::EXTRA_ACTIVE,
        }
    }
}
