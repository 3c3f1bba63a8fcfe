// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mood entry as exchanged with the remote API.

use serde::{Deserialize, Serialize};

/// One journal record. Owned by the remote API; the client only holds
/// transient copies for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Submitter display name (the only per-user key the API has)
    pub name: String,
    /// Free-text mood
    pub mood: String,
    /// Submission time (ISO-8601)
    pub timestamp: String,
}
