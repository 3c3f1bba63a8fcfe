// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mood Journal server
//!
//! Serves the mood-journaling page: Google sign-in, session cookie,
//! submission and history against a remote mood API.

use mood_journal::{
    config::Config,
    services::{IdentityDecoder, MoodApiClient},
    session::SessionStore,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Mood Journal");

    let session = SessionStore::new(config.session_signing_key.clone());
    let identity = IdentityDecoder::new();

    let mood_client = MoodApiClient::new(config.mood_api_url.clone());
    tracing::info!(api_url = %config.mood_api_url, "Mood API client initialized");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        session,
        identity,
        mood_client,
    });

    // Build router
    let app = mood_journal::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mood_journal=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
