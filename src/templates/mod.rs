// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML rendering for the journal page.
//!
//! Every UI region is a pure function from explicit state to a markup
//! string, so views are testable without a browser.

pub mod history;
pub mod notice;
pub mod pages;

pub use notice::{Notice, NoticeKind};
pub use pages::{logged_in_page, logged_out_page, LoggedInView, LoggedOutView};

/// Escape text for safe interpolation into HTML content or attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Shared page shell. The trailing script is the banner's fixed 3-second
/// self-removal; the identity-provider script renders the sign-in button.
pub fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Mood Journal</title>
    <script src="https://accounts.google.com/gsi/client" async defer></script>
</head>
<body>
    <h1>Mood Journal</h1>
{body}
    <script>
        setTimeout(function () {{
            var message = document.querySelector('.message');
            if (message) message.remove();
        }}, 3000);
    </script>
</body>
</html>"#
    )
}
