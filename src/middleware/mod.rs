// ABOUTME: HTTP middleware for CORS and request correlation
// ABOUTME: Provides request ID generation and cross-origin setup for the browser form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-Origin Resource Sharing configuration
pub mod cors;
/// Request ID propagation and generation
pub mod request_id;

// CORS configuration
pub use cors::setup_cors;

// Request correlation
pub use request_id::{request_id_middleware, RequestId};
