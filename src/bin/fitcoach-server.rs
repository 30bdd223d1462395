// ABOUTME: FitCoach server binary: loads configuration, initializes logging and serves HTTP
// ABOUTME: Command-line flags override the port and bind address from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # FitCoach Server Binary
//!
//! Starts the FitCoach HTTP API. Configuration comes from environment variables
//! (and `.env` when present); see `config::environment`.

use anyhow::Result;
use clap::Parser;
use fitcoach_server::{
    config::ServerConfig, constants::env_config, logging, resources::ServerResources,
    server::FitCoachServer,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "fitcoach-server")]
#[command(about = "FitCoach AI - personalized workout and meal plans over HTTP")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let dotenv = dotenvy::dotenv();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_config(&config)?;

    if let Err(e) = dotenv {
        warn!("No .env file found or failed to load: {}", e);
    }
    if !config.openrouter.has_api_key() {
        warn!(
            "{} not set: plan generation will serve fallback plans only",
            env_config::OPENROUTER_API_KEY
        );
    }

    info!("Starting FitCoach server");
    info!("{}", config.summary());

    let (host, port) = (config.host.clone(), config.http_port);
    let resources = Arc::new(ServerResources::from_config(config)?);
    display_available_endpoints(&host, port);

    if let Err(e) = FitCoachServer::new(resources).run(&host, port).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Display the API surface at startup
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(host: &str, port: u16) {
    info!("=== Available API Endpoints ===");
    info!("   Health:          GET  http://{host}:{port}/health");
    info!("   Workout Plan:    POST http://{host}:{port}/api/generate-workout");
    info!("   Meal Plan:       POST http://{host}:{port}/api/generate-meal-plan");
    info!("   Start Workout:   POST http://{host}:{port}/api/start-workout");
    info!("   Complete:        POST http://{host}:{port}/api/complete-workout");
    info!("   Log Meal:        POST http://{host}:{port}/api/log-meal");
    info!("   Log Progress:    POST http://{host}:{port}/api/log-progress");
    info!("   Profile:         POST http://{host}:{port}/api/save-profile");
    info!("   Export:          GET  http://{host}:{port}/api/export-data/{{user_id}}");
    info!("   Chat:            POST http://{host}:{port}/api/chat");
    info!("=== End of Endpoint List ===");
}
