// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Human-relative label for an entry timestamp.
///
/// Thresholds are millisecond-exact against `now`: under a minute is
/// "Just now", under an hour counts minutes, under a day counts hours,
/// anything older gets an absolute date/time. A timestamp that does not
/// parse as RFC3339 is displayed as-is.
pub fn format_relative(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };

    let diff_ms = (now - parsed.with_timezone(&Utc)).num_milliseconds();

    if diff_ms < MINUTE_MS {
        return "Just now".to_string();
    }
    if diff_ms < HOUR_MS {
        let minutes = diff_ms / MINUTE_MS;
        return format!("{} minute{} ago", minutes, plural(minutes));
    }
    if diff_ms < DAY_MS {
        let hours = diff_ms / HOUR_MS;
        return format!("{} hour{} ago", hours, plural(hours));
    }

    parsed.format("%b %-d, %Y, %-I:%M %p").to_string()
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
