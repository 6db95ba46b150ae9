// ABOUTME: Server-side constants for defaults and environment variable names
// ABOUTME: Formula coefficients live in the core crate; this module covers deployment knobs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module

pub use body_metrics_core::constants::{messages, physiology, service_names};

/// Default values applied when the environment leaves a setting unset
pub mod defaults {
    /// Loopback bind address
    pub const HOST: [u8; 4] = [127, 0, 0, 1];
    /// HTTP port the browser form expects
    pub const HTTP_PORT: u16 = 3000;
    /// Directory containing `index.html`
    pub const STATIC_DIR: &str = "./static";
    /// Upper bound on a single request
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Environment variable names
pub mod env_keys {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Static asset directory
    pub const STATIC_DIR: &str = "STATIC_DIR";
    /// `*` or comma-separated origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Log filter used when `RUST_LOG` is unset
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Full tracing filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// development | production | testing
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// HTTP header names
pub mod headers {
    /// Correlation header echoed on every response
    pub const REQUEST_ID: &str = "x-request-id";
}
