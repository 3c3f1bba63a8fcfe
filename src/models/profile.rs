//! User profile carried in the session cookie.

use serde::{Deserialize, Serialize};

/// Signed-in user, built from decoded identity token claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Profile picture URL
    pub picture_url: String,
    /// Identity provider subject ID (stable, unlike the display name)
    pub provider_id: String,
}

impl UserProfile {
    /// Name used when submitting entries. The provider can omit the name
    /// claim entirely; submissions then fall back to a placeholder.
    pub fn submit_name(&self) -> &str {
        if self.name.is_empty() {
            "User"
        } else {
            &self.name
        }
    }
}
