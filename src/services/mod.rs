// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod identity;
pub mod mood_api;

pub use identity::IdentityDecoder;
pub use mood_api::MoodApiClient;
