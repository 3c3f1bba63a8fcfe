// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session persistence via a signed cookie.
//!
//! The whole [`UserProfile`] travels in an HS256 JWT under a fixed cookie
//! name. Written once at sign-in, read on every page load, removed at
//! logout. A missing, corrupt, or expired cookie is simply "no session".

use crate::models::UserProfile;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Session cookie name
pub const SESSION_COOKIE: &str = "mood_session";

/// Session lifetime: 30 days
const SESSION_TTL_SECS: usize = 30 * 24 * 60 * 60;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
struct Claims {
    /// Subject (identity provider subject ID)
    sub: String,
    name: String,
    email: String,
    picture: String,
    /// Expiration time (Unix timestamp)
    exp: usize,
    /// Issued at (Unix timestamp)
    iat: usize,
}

/// The only mutation surface for session state.
#[derive(Clone)]
pub struct SessionStore {
    signing_key: Vec<u8>,
}

impl SessionStore {
    pub fn new(signing_key: Vec<u8>) -> Self {
        Self { signing_key }
    }

    /// Write the profile into the session cookie.
    pub fn save(&self, jar: CookieJar, profile: &UserProfile) -> anyhow::Result<CookieJar> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

        let claims = Claims {
            sub: profile.provider_id.clone(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            picture: profile.picture_url.clone(),
            iat: now,
            exp: now + SESSION_TTL_SECS,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.signing_key),
        )?;

        Ok(jar.add(session_cookie(token)))
    }

    /// Read the profile back, or `None` for any missing/invalid cookie.
    pub fn load(&self, jar: &CookieJar) -> Option<UserProfile> {
        let token = jar.get(SESSION_COOKIE)?.value().to_string();

        let key = DecodingKey::from_secret(&self.signing_key);
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(&token, &key, &validation).ok()?;
        let claims = token_data.claims;

        Some(UserProfile {
            name: claims.name,
            email: claims.email,
            picture_url: claims.picture,
            provider_id: claims.sub,
        })
    }

    /// Remove the session cookie.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.remove(session_cookie(String::new()))
    }
}

/// Cookie attributes must match between save and clear or the browser
/// will not remove the original.
fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
