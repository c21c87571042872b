// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use config::{AppConfig, Args};
use server::{app, logging, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = AppConfig::load(&args.env_file)?;
    // Held until exit so buffered file logs are flushed.
    let _guard = logging::init(&config.log)?;

    let addr = format!("{}:{}", config.express.bind_host, config.express.port);
    let log_level = config.log.level.clone();

    let state = AppState::new(config);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting server on {}", listener.local_addr()?);
    tracing::info!("Log level: {}", log_level);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
