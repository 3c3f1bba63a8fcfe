// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The journal page itself.

use crate::templates::history::{filter_for_user, sort_newest_first};
use crate::templates::{logged_in_page, logged_out_page, LoggedInView, LoggedOutView, Notice};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::Html,
    routing::get,
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

/// Flash state carried across the post/redirect/get cycle.
#[derive(Deserialize)]
struct PageQuery {
    /// Notice code set by a redirecting handler
    #[serde(default)]
    notice: Option<String>,
    /// Mood text to retain in the form after a failed submit
    #[serde(default)]
    mood: Option<String>,
}

/// Render the page for the current session state.
///
/// A history fetch failure does not log the user out: the logged-in page
/// renders with an error banner and an empty list.
async fn index(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let Some(profile) = state.session.load(&jar) else {
        let login_uri = format!("{}/auth/callback", base_url(&headers));
        return Html(logged_out_page(&LoggedOutView {
            client_id: &state.config.google_client_id,
            login_uri: &login_uri,
        }));
    };

    let (all_entries, fetch_notice) = match state.mood_client.fetch_all().await {
        Ok(entries) => (entries, None),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load mood history");
            (Vec::new(), Some(Notice::error("Failed to load mood history")))
        }
    };

    let mut entries = filter_for_user(&all_entries, &profile.name);
    sort_newest_first(&mut entries);

    // A fetch error from this very request outranks a stale flash code.
    let notice = fetch_notice.or_else(|| query.notice.as_deref().and_then(notice_from_code));

    Html(logged_in_page(&LoggedInView {
        profile: &profile,
        entries,
        notice,
        prefill: query.mood.unwrap_or_default(),
        now: chrono::Utc::now(),
    }))
}

/// Map a flash code from a redirect back to its banner.
fn notice_from_code(code: &str) -> Option<Notice> {
    match code {
        "submitted" => Some(Notice::success("Mood submitted successfully!")),
        "submit_failed" => Some(Notice::error("Failed to submit mood")),
        "mood_required" => Some(Notice::error("Please enter your mood")),
        _ => None,
    }
}

/// Reconstruct our external base URL from the Host header, so the identity
/// widget gets an absolute login_uri.
fn base_url(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost:8080");

    let scheme = if host.contains("localhost") || host.contains("127.0.0.1") {
        "http"
    } else {
        "https"
    };

    format!("{}://{}", scheme, host)
}
