// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::cookie::CookieJar;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use mood_journal::config::Config;
use mood_journal::models::{MoodEntry, UserProfile};
use mood_journal::routes::create_router;
use mood_journal::services::{IdentityDecoder, MoodApiClient};
use mood_journal::session::{SessionStore, SESSION_COOKIE};
use mood_journal::AppState;
use std::sync::{Arc, Mutex};

pub type MoodLog = Arc<Mutex<Vec<MoodEntry>>>;

/// Build the app under test against the given mood API URL.
#[allow(dead_code)]
pub fn create_test_app(mood_api_url: &str) -> (Router, Config) {
    let mut config = Config::test_default();
    config.mood_api_url = mood_api_url.trim_end_matches('/').to_string();

    let state = Arc::new(AppState {
        session: SessionStore::new(config.session_signing_key.clone()),
        identity: IdentityDecoder::new(),
        mood_client: MoodApiClient::new(config.mood_api_url.clone()),
        config: config.clone(),
    });

    (create_router(state), config)
}

/// Spawn an in-process stand-in for the remote mood API on an ephemeral
/// port. Returns its base URL and a handle on the stored entries.
#[allow(dead_code)]
pub async fn spawn_mood_api(initial: Vec<MoodEntry>) -> (String, MoodLog) {
    let entries: MoodLog = Arc::new(Mutex::new(initial));

    async fn list_moods(State(entries): State<MoodLog>) -> Json<Vec<MoodEntry>> {
        Json(entries.lock().unwrap().clone())
    }

    async fn store_mood(
        State(entries): State<MoodLog>,
        Json(entry): Json<MoodEntry>,
    ) -> Json<serde_json::Value> {
        entries.lock().unwrap().push(entry);
        Json(serde_json::json!({"status": "success", "message": "Mood entry saved"}))
    }

    let app = Router::new()
        .route("/get_moods", get(list_moods))
        .route("/submit_mood", post(store_mood))
        .with_state(entries.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), entries)
}

/// Spawn a mood API that answers every request with HTTP 500.
#[allow(dead_code)]
pub async fn spawn_broken_mood_api() -> String {
    let app = Router::new()
        .route("/get_moods", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route(
            "/submit_mood",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A base URL nothing listens on, for connection-level failures.
#[allow(dead_code)]
pub async fn unreachable_mood_api() -> String {
    // Bind to grab a free port, then drop the listener
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Forge a three-segment credential the way the provider would issue it.
/// The decoder never inspects the signature segment.
#[allow(dead_code)]
pub fn forge_credential(sub: &str, name: &str, email: &str, picture: &str) -> String {
    let claims = serde_json::json!({
        "sub": sub,
        "name": name,
        "email": email,
        "picture": picture,
    });

    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.testsignature")
}

#[allow(dead_code)]
pub fn test_profile(name: &str) -> UserProfile {
    UserProfile {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        picture_url: format!("https://example.com/{}.png", name.to_lowercase()),
        provider_id: "109876543210987654321".to_string(),
    }
}

/// Cookie header value for an established session.
#[allow(dead_code)]
pub fn session_cookie_for(config: &Config, profile: &UserProfile) -> String {
    let store = SessionStore::new(config.session_signing_key.clone());
    let jar = store.save(CookieJar::new(), profile).unwrap();
    let token = jar.get(SESSION_COOKIE).unwrap().value().to_string();
    format!("{}={}", SESSION_COOKIE, token)
}

/// Collect a response body into a string.
#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// An entry timestamped now, as the app would submit it.
#[allow(dead_code)]
pub fn entry_now(name: &str, mood: &str) -> MoodEntry {
    MoodEntry {
        name: name.to_string(),
        mood: mood.to_string(),
        timestamp: mood_journal::time_utils::format_utc_rfc3339(chrono::Utc::now()),
    }
}
