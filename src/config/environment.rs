// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_keys};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Allowed CORS origins
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (`*`)
    Any,
    /// Explicit origin list
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse `*` or a comma-separated origin list; an empty list means any
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "*" {
            return Self::Any;
        }

        let origins: Vec<String> = trimmed
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();

        if origins.is_empty() {
            Self::Any
        } else {
            Self::List(origins)
        }
    }
}

impl fmt::Display for CorsOrigins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::List(origins) => f.write_str(&origins.join(",")),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: IpAddr,
    /// HTTP API port
    pub http_port: u16,
    /// Directory holding the browser form (`index.html`, `functions.js`)
    pub static_dir: PathBuf,
    /// CORS allowed origins
    pub cors_origins: CorsOrigins,
    /// Per-request timeout
    pub request_timeout_secs: u64,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from(defaults::HOST),
            http_port: defaults::HTTP_PORT,
            static_dir: PathBuf::from(defaults::STATIC_DIR),
            cors_origins: CorsOrigins::Any,
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let base = Self::default();
        let config = Self {
            host: parse_env_or(env_keys::HOST, base.host)?,
            http_port: parse_env_or(env_keys::HTTP_PORT, base.http_port)?,
            static_dir: env::var(env_keys::STATIC_DIR).map_or(base.static_dir, PathBuf::from),
            cors_origins: env::var(env_keys::CORS_ALLOWED_ORIGINS)
                .map_or(base.cors_origins, |raw| CorsOrigins::parse(&raw)),
            request_timeout_secs: parse_env_or(
                env_keys::REQUEST_TIMEOUT_SECS,
                base.request_timeout_secs,
            )?,
            environment: env::var(env_keys::ENVIRONMENT)
                .map_or(base.environment, |raw| Environment::from_str_or_default(&raw)),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("REQUEST_TIMEOUT_SECS must be greater than zero"));
        }
        Ok(())
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Body Metrics Server Configuration:\n\
             - Listen: {}:{}\n\
             - Static Dir: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Environment: {}",
            self.host,
            self.http_port,
            self.static_dir.display(),
            self.cors_origins,
            self.request_timeout_secs,
            self.environment,
        )
    }
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: '{raw}'")),
        Err(_) => Ok(default),
    }
}
