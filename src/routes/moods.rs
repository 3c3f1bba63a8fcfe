// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mood submission.

use crate::models::MoodEntry;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{extract::State, response::Redirect, routing::post, Form, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/moods", post(submit_mood))
}

#[derive(Deserialize)]
struct MoodForm {
    #[serde(default)]
    mood: String,
}

/// Handle the mood form POST.
///
/// Outcomes travel back to the page as flash codes; a failed submit also
/// carries the entered text so the form keeps it.
async fn submit_mood(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<MoodForm>,
) -> Redirect {
    let mood = form.mood.trim().to_string();
    if mood.is_empty() {
        // Validation failure: no network call is made
        return Redirect::to("/?notice=mood_required");
    }

    let Some(profile) = state.session.load(&jar) else {
        return Redirect::to("/");
    };

    let entry = MoodEntry {
        name: profile.submit_name().to_string(),
        mood: mood.clone(),
        timestamp: format_utc_rfc3339(chrono::Utc::now()),
    };

    match state.mood_client.submit(&entry).await {
        Ok(()) => {
            tracing::info!(name = %entry.name, "Mood entry submitted");
            Redirect::to("/?notice=submitted")
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to submit mood");
            let retain = urlencoding::encode(&mood);
            Redirect::to(&format!("/?notice=submit_failed&mood={}", retain))
        }
    }
}
