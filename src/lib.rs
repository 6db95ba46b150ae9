// ABOUTME: Main library entry point for the body metrics calculator server
// ABOUTME: Exposes BMI, body fat, ideal weight, and calories burned over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Body Metrics Server
//!
//! A small HTTP service computing body metrics from query-string
//! measurements, plus a browser form that chains the calculations.
//!
//! ## Endpoints
//!
//! - `GET /bmi?height=&weight=`
//! - `GET /bodyfat?age=&gender=&bmi=`
//! - `GET /idealweight?weight=&bodyFat=`
//! - `GET /caloriesburned?weight=&height=&age=&activityLevel=&calories=`
//! - `GET /health`, `GET /ready`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use body_metrics_server::config::environment::ServerConfig;
//! use body_metrics_server::server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     server::run(config).await
//! }
//! ```

/// Configuration management and persistence
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Unified error handling
pub mod errors;

/// Body composition formulas and the validating metrics calculator
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request IDs)
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
