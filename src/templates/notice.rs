// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Transient success/error banner.

use super::html_escape;

/// Banner styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient message. The page holds at most one; rendering a new
/// notice replaces whatever was shown before, and the page shell removes
/// the banner after three seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Render the banner slot. `None` renders nothing.
pub fn notice_banner(notice: Option<&Notice>) -> String {
    let Some(notice) = notice else {
        return String::new();
    };

    let class = match notice.kind {
        NoticeKind::Success => "success",
        NoticeKind::Error => "error",
    };

    format!(
        r#"<div class="message {class}">{}</div>"#,
        html_escape(&notice.text)
    )
}
