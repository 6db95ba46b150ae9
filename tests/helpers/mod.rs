// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the Axum request driver and a router fixture with a temporary static dir
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;

use body_metrics_server::config::environment::ServerConfig;
use body_metrics_server::server::{build_router, AppState};
use std::sync::Arc;
use tempfile::TempDir;

/// Markup written to the temporary static directory
#[allow(dead_code)]
pub const TEST_INDEX_HTML: &str = "<html><body>Body Metrics Calculator</body></html>";

/// Full application router backed by a temporary static directory
///
/// The returned `TempDir` must outlive the router.
#[allow(dead_code)]
pub fn test_app() -> (axum::Router, TempDir) {
    let static_dir = tempfile::tempdir().expect("Failed to create static dir");
    std::fs::write(static_dir.path().join("index.html"), TEST_INDEX_HTML)
        .expect("Failed to write index.html");
    std::fs::write(
        static_dir.path().join("functions.js"),
        "document.addEventListener('DOMContentLoaded', () => {});",
    )
    .expect("Failed to write functions.js");

    let config = ServerConfig {
        static_dir: static_dir.path().to_path_buf(),
        ..ServerConfig::default()
    };

    (build_router(Arc::new(AppState::new(config))), static_dir)
}
