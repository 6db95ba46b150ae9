// ABOUTME: Route module organization for the body metrics HTTP endpoints
// ABOUTME: Groups calculator, health, and static routes by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the metrics calculator.

/// Calculator endpoints (`/bmi`, `/bodyfat`, `/idealweight`, `/caloriesburned`)
pub mod calculators;
/// Health check and readiness routes
pub mod health;
/// Static browser form
pub mod static_files;

/// Calculator route handlers
pub use calculators::CalculatorRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Static asset service
pub use static_files::StaticRoutes;
