// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The two page states: logged out and logged in.
//!
//! One render function per state, one per region inside it. There is no
//! intermediate error state - a failed history fetch renders the logged-in
//! page with an error banner and an empty list.

use super::history::history_section;
use super::notice::{notice_banner, Notice};
use super::{html_escape, page};
use crate::models::{MoodEntry, UserProfile};
use chrono::{DateTime, Utc};

/// State for the logged-out page.
pub struct LoggedOutView<'a> {
    pub client_id: &'a str,
    /// Absolute URL the identity widget POSTs the credential to.
    pub login_uri: &'a str,
}

/// State for the logged-in page.
pub struct LoggedInView<'a> {
    pub profile: &'a UserProfile,
    /// Already filtered to the profile and sorted newest-first.
    pub entries: Vec<&'a MoodEntry>,
    pub notice: Option<Notice>,
    /// Retained form text after a failed submit.
    pub prefill: String,
    pub now: DateTime<Utc>,
}

/// Render the logged-out page: sign-in widget visible, app content absent.
pub fn logged_out_page(view: &LoggedOutView) -> String {
    page(&login_section(view.client_id, view.login_uri))
}

/// Render the logged-in page: badge, form, banner slot, history.
pub fn logged_in_page(view: &LoggedInView) -> String {
    let body = format!(
        r#"{badge}
<div id="app-content" class="active">
    {banner}
    <form id="mood-form" method="post" action="/moods">
        <input type="text" id="mood-input" name="mood"
               placeholder="How are you feeling today?"
               value="{prefill}" autocomplete="off">
        <button type="submit" class="btn">Submit</button>
    </form>
    <div id="mood-history">{history}</div>
</div>"#,
        badge = user_badge(view.profile),
        banner = notice_banner(view.notice.as_ref()),
        prefill = html_escape(&view.prefill),
        history = history_section(&view.entries, view.now),
    );

    page(&body)
}

/// Sign-in region. Auto-select stays disabled so a logged-out user is not
/// silently signed back in.
fn login_section(client_id: &str, login_uri: &str) -> String {
    format!(
        r#"<div id="login-section">
    <p>Sign in to start journaling your moods.</p>
    <div id="g_id_onload"
         data-client_id="{client_id}"
         data-login_uri="{login_uri}"
         data-auto_select="false"></div>
    <div class="g_id_signin" id="g_id_signin"
         data-theme="outline"
         data-size="large"
         data-type="standard"
         data-text="sign_in_with"
         data-shape="rectangular"
         data-logo_alignment="left"></div>
</div>"#,
        client_id = html_escape(client_id),
        login_uri = html_escape(login_uri),
    )
}

/// User badge plus the logout action.
fn user_badge(profile: &UserProfile) -> String {
    format!(
        r#"<div id="user-section" class="active">
    <div class="user-info">
        <img src="{picture}" alt="Profile" class="user-profile-pic">
        <span class="user-name">{name}</span>
    </div>
    <a class="btn btn-logout" id="logout-btn" href="/auth/logout">Logout</a>
</div>"#,
        picture = html_escape(&profile.picture_url),
        name = html_escape(&profile.name),
    )
}
