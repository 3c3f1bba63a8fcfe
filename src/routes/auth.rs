// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sign-in callback and logout.

use crate::AppState;
use axum::{
    extract::State,
    response::Redirect,
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

/// Cookie the identity widget pairs with its form field for CSRF defense.
const CSRF_COOKIE: &str = "g_csrf_token";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/callback", post(auth_callback))
        .route("/auth/logout", get(logout))
}

/// Credential POST from the identity widget.
#[derive(Deserialize)]
struct CallbackForm {
    credential: String,
    #[serde(default)]
    g_csrf_token: Option<String>,
}

/// Handle the identity widget's credential POST.
///
/// Every failure path lands back on the page with no session - a bad
/// credential aborts the sign-in, it never errors the page.
async fn auth_callback(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<CallbackForm>,
) -> (CookieJar, Redirect) {
    if !csrf_token_matches(&jar, form.g_csrf_token.as_deref()) {
        tracing::warn!("Sign-in rejected: CSRF token mismatch");
        return (jar, Redirect::to("/"));
    }

    let profile = match state.identity.decode(&form.credential) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!(error = %e, "Credential decode failed, sign-in aborted");
            return (jar, Redirect::to("/"));
        }
    };

    match state.session.save(jar.clone(), &profile) {
        Ok(jar) => {
            tracing::info!(name = %profile.name, "User signed in");
            (jar, Redirect::to("/"))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create session");
            (jar, Redirect::to("/"))
        }
    }
}

/// Logout - remove the session cookie.
///
/// Provider-side sign-out (disabling auto-select) is carried by the login
/// markup the user lands on next.
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = state.session.clear(jar);
    (jar, Redirect::to("/"))
}

/// The widget sends its CSRF token as both a cookie and a form field.
/// When either side shows up, both must be present and equal.
fn csrf_token_matches(jar: &CookieJar, field: Option<&str>) -> bool {
    match (jar.get(CSRF_COOKIE).map(|c| c.value()), field) {
        (None, None) => true,
        (Some(cookie), Some(field)) => cookie == field,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Cookie;

    fn jar_with_csrf(value: &str) -> CookieJar {
        CookieJar::new().add(Cookie::new(CSRF_COOKIE, value.to_string()))
    }

    #[test]
    fn csrf_passes_when_both_absent() {
        assert!(csrf_token_matches(&CookieJar::new(), None));
    }

    #[test]
    fn csrf_passes_when_both_match() {
        assert!(csrf_token_matches(&jar_with_csrf("tok"), Some("tok")));
    }

    #[test]
    fn csrf_fails_on_mismatch() {
        assert!(!csrf_token_matches(&jar_with_csrf("tok"), Some("other")));
    }

    #[test]
    fn csrf_fails_when_one_side_missing() {
        assert!(!csrf_token_matches(&jar_with_csrf("tok"), None));
        assert!(!csrf_token_matches(&CookieJar::new(), Some("tok")));
    }
}
