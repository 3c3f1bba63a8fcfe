// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mood Journal: a mood-journaling web app.
//!
//! This crate serves the journal page, signs users in with Google Identity
//! Services credentials, keeps the session in a signed cookie, and syncs
//! entries with a remote mood API.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod templates;
pub mod time_utils;

use config::Config;
use services::{IdentityDecoder, MoodApiClient};
use session::SessionStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub session: SessionStore,
    pub identity: IdentityDecoder,
    pub mood_client: MoodApiClient,
}
