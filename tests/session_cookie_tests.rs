// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session cookie attribute tests.
//!
//! These tests verify cookie removal attributes on logout match the
//! creation attributes, so browsers actually drop the session.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use tower::ServiceExt;

mod common;

fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

fn find_cookie(headers: &[String], name: &str) -> String {
    headers
        .iter()
        .find(|value| value.starts_with(&format!("{name}=")))
        .cloned()
        .unwrap_or_else(|| panic!("missing Set-Cookie header for {name}: {headers:?}"))
}

#[tokio::test]
async fn test_logout_removes_session_cookie() {
    let (app, config) = common::create_test_app("http://127.0.0.1:1");
    let cookie = common::session_cookie_for(&config, &common::test_profile("Alex"));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/auth/logout")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    let set_cookies = set_cookie_headers(&response);
    let removal = find_cookie(&set_cookies, "mood_session");

    assert!(removal.contains("Path=/"));
    assert!(removal.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_logout_without_session_still_redirects() {
    let (app, _) = common::create_test_app("http://127.0.0.1:1");

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
}

#[tokio::test]
async fn test_tampered_session_is_logged_out() {
    let (app, config) = common::create_test_app("http://127.0.0.1:1");
    let cookie = common::session_cookie_for(&config, &common::test_profile("Alex"));
    // Flip a character in the signature
    let tampered = format!("{}x", cookie);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .header(header::COOKIE, tampered)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains(r#"id="login-section""#));
}
