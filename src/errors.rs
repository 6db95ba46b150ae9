// ABOUTME: Error handling re-exports from the core crate
// ABOUTME: Keeps crate::errors paths stable for handlers and evaluators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! `AppError` converts into an axum response (`{ "error": <message> }`) so
//! handlers can return `Result<_, AppError>` directly.

pub use body_metrics_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
