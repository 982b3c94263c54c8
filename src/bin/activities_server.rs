// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities API Server
//!
//! Serves the in-memory activity roster that the directory client talks to.

use activity_directory::{config::Config, logging, services::RosterStore, AppState};
use anyhow::Context;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(port = config.port, "Starting activities server");

    let roster = RosterStore::seeded();
    tracing::info!(count = roster.list().await.len(), "Activity roster seeded");

    let state = Arc::new(AppState {
        config: config.clone(),
        roster,
    });

    let app = activity_directory::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
