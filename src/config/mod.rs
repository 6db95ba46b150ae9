// ABOUTME: Configuration management module for centralized server settings and parameters
// ABOUTME: Handles environment configs and formula coefficient settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: Server configuration from environment variables
//! - **Formulas**: Coefficients for the body composition calculators

/// Environment and server configuration
pub mod environment;
/// Body composition and energy expenditure coefficients
pub mod formulas;

pub use environment::{CorsOrigins, Environment, ServerConfig};
pub use formulas::{ActivityFactorsConfig, BodyFatConfig, FormulaConfig, HarrisBenedictConfig};
