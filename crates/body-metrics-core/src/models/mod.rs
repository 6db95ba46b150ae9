// ABOUTME: Measurement input models shared by evaluators and the HTTP layer
// ABOUTME: Enumerated fields parse from their exact lowercase wire spelling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models

/// Gender and activity level enumerations
pub mod measurement;

pub use measurement::{ActivityLevel, Gender, UnknownVariant};
