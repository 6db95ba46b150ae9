// ABOUTME: Body metrics server binary with CLI overrides for listen address and static dir
// ABOUTME: Loads environment configuration, initializes logging, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Body Metrics Server Binary
//!
//! Starts the calculator API and the browser form.

use anyhow::Result;
use body_metrics_server::{config::environment::ServerConfig, logging, server};
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "body-metrics-server")]
#[command(about = "Body Metrics API - BMI, body fat, ideal weight and calories burned")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<IpAddr>,

    /// Override directory holding the browser form
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl Args {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(http_port) = self.http_port {
            config.http_port = http_port;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging first so configuration loading is recorded
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    args.apply(&mut config);

    info!("Starting Body Metrics Server");
    info!("{}", config.summary());
    info!("Endpoints:");
    info!("  GET /bmi?height=&weight=");
    info!("  GET /bodyfat?age=&gender=&bmi=");
    info!("  GET /idealweight?weight=&bodyFat=");
    info!("  GET /caloriesburned?weight=&height=&age=&activityLevel=&calories=");
    info!("  GET /health, /ready");

    server::run(config).await
}
