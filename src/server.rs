// ABOUTME: HTTP server assembly with routes, middleware layers, and graceful shutdown
// ABOUTME: Owns the shared application state handed to every calculator handler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP server
//!
//! Layer order, outermost first: request tracing span, request ID, CORS,
//! timeout, then the routes. Unmatched paths fall through to the static form.

use crate::config::environment::ServerConfig;
use crate::config::formulas::FormulaConfig;
use crate::intelligence::MetricsCalculator;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::routes::{CalculatorRoutes, HealthRoutes, StaticRoutes};
use anyhow::{Context, Result};
use axum::{body::Body, middleware, Router};
use http::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{field, info, info_span, warn, Span};

/// Immutable state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Calculator with the active formula coefficients
    pub calculator: MetricsCalculator,
}

impl AppState {
    /// State using the published formula coefficients
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self::with_formulas(config, FormulaConfig::default())
    }

    /// State with explicit formula coefficients
    #[must_use]
    pub fn with_formulas(config: ServerConfig, formulas: FormulaConfig) -> Self {
        Self {
            config,
            calculator: MetricsCalculator::new(formulas),
        }
    }
}

/// Build the complete application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let config = &state.config;

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(CalculatorRoutes::routes(Arc::clone(&state)))
        .fallback_service(StaticRoutes::service(&config.static_dir))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(setup_cors(config))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
}

fn make_request_span(request: &Request<Body>) -> Span {
    info_span!(
        "http_request",
        http.method = %request.method(),
        http.path = %request.uri().path(),
        request_id = field::Empty,
    )
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.http_port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    if !config.static_dir.is_dir() {
        warn!(
            static_dir = %config.static_dir.display(),
            "Static directory not found; the browser form will return 404"
        );
    }

    let app = build_router(Arc::new(AppState::new(config)));

    info!("Listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
