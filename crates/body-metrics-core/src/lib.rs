// ABOUTME: Core types and constants for the body metrics calculator
// ABOUTME: Foundation crate with error handling, measurement enums, and formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Body Metrics Core
//!
//! Foundation crate providing shared types and constants for the body metrics
//! calculator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Published formula coefficients and validation messages
//! - **models**: Enumerated measurement inputs (`Gender`, `ActivityLevel`)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Formula coefficients and user-facing messages organized by domain
pub mod constants;

/// Measurement input models
pub mod models;
