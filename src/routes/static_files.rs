// ABOUTME: Static file service for the browser calculator form
// ABOUTME: Serves index.html and functions.js from the configured directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use tower_http::services::ServeDir;

/// Static asset routes
pub struct StaticRoutes;

impl StaticRoutes {
    /// File service rooted at `dir`; `/` resolves to `index.html`
    pub fn service(dir: &Path) -> ServeDir {
        ServeDir::new(dir).append_index_html_on_directories(true)
    }
}
