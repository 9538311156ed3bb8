// ABOUTME: Server binary for the Pierre activity prediction service
// ABOUTME: Loads environment configuration, opens SQLite, and serves the prediction API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pierre Predictions Server Binary
//!
//! Configuration comes from the environment (`HTTP_PORT`, `HOST`,
//! `DATABASE_URL`, `ENVIRONMENT`, `LOG_LEVEL`); the flags below override it.

use anyhow::Result;
use clap::Parser;
use pierre_predictions::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "pierre-predictions-server")]
#[command(about = "Pierre activity predictions - goal, anomaly, trend, and insight analytics")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (e.g. `sqlite:./data/predictions.db`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config.database_url = DatabaseUrl::parse_url(database_url)?;
    }
    config.validate()?;

    logging::init_for_server(&config)?;

    info!("Starting Pierre Predictions");
    info!("{}", config.summary());

    let database = Database::connect(&config.database_url).await?;
    let resources = Arc::new(ServerResources::new(database, config));

    server::run(resources).await
}
