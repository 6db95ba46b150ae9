// ABOUTME: Integration tests for logging configuration resolved from the environment
// ABOUTME: Mutates process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use body_metrics_server::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const KEYS: [&str; 6] = [
    "RUST_LOG",
    "LOG_LEVEL",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
];

fn clear_env() {
    for key in KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_rust_log_takes_precedence_over_log_level() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_LEVEL", "warn");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert!(config.env_filter().is_ok());
}

#[test]
#[serial]
fn test_log_level_used_without_rust_log() {
    clear_env();
    env::set_var("LOG_LEVEL", "warn");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "warn");
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_production_alias_enables_detail() {
    clear_env();
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("LOG_FORMAT", "json");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.environment, "production");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
}
