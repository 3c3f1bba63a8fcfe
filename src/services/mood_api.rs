// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Remote mood API client.
//!
//! Handles:
//! - Fetching the full entry set
//! - Submitting a new entry
//!
//! Both calls are single-shot: no retries, no timeout beyond the platform
//! default, and callers get one opaque error per failure.

use crate::error::AppError;
use crate::models::MoodEntry;

/// Mood API client.
#[derive(Clone)]
pub struct MoodApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl MoodApiClient {
    /// Create a new client for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch every entry the API holds (all users).
    pub async fn fetch_all(&self) -> Result<Vec<MoodEntry>, AppError> {
        let url = format!("{}/get_moods", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::MoodApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Submit a new entry. Success is the HTTP status alone; the response
    /// body is not validated.
    pub async fn submit(&self, entry: &MoodEntry) -> Result<(), AppError> {
        let url = format!("{}/submit_mood", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(entry)
            .send()
            .await
            .map_err(|e| AppError::MoodApi(e.to_string()))?;

        self.check_response(response).await?;
        Ok(())
    }

    /// Check response status and return error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<(), AppError> {
        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::MoodApi(format!("HTTP {}: {}", status, body)))
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::MoodApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::MoodApi(format!("JSON parse error: {}", e)))
    }
}
