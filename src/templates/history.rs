// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mood history: filtering, ordering, and list rendering.

use super::html_escape;
use crate::models::MoodEntry;
use crate::time_utils::format_relative;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Keyword table for icon selection. Checked in order, first match wins.
const MOOD_ICONS: &[(&str, &str)] = &[
    ("happy", "😊"),
    ("good", "😊"),
    ("great", "😊"),
    ("excellent", "😊"),
    ("sad", "😢"),
    ("down", "😢"),
    ("depressed", "😢"),
    ("angry", "😠"),
    ("mad", "😠"),
    ("frustrated", "😠"),
    ("excited", "🤩"),
    ("amazing", "🤩"),
    ("anxious", "😰"),
    ("nervous", "😰"),
    ("worried", "😰"),
    ("calm", "😌"),
    ("peaceful", "😌"),
    ("relaxed", "😌"),
    ("tired", "😴"),
    ("sleepy", "😴"),
];

const DEFAULT_ICON: &str = "😐";

/// Entries belonging to `name`, exact string equality, arrival order kept.
/// Display names are the API's only per-user key, so "Alex" and "alex" are
/// different users here.
pub fn filter_for_user<'a>(entries: &'a [MoodEntry], name: &str) -> Vec<&'a MoodEntry> {
    entries.iter().filter(|entry| entry.name == name).collect()
}

/// Order newest-first by parsed timestamp.
///
/// The API gives no ordering guarantee, so arrival order is not trusted.
/// Entries whose timestamps do not parse sort last; ties keep arrival order.
pub fn sort_newest_first(entries: &mut [&MoodEntry]) {
    entries.sort_by(|a, b| {
        match (parse_ts(&a.timestamp), parse_ts(&b.timestamp)) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

fn parse_ts(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Pick an icon for a mood by case-insensitive substring match.
pub fn mood_icon(mood: &str) -> &'static str {
    let lower = mood.to_lowercase();
    MOOD_ICONS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Render the history region. Zero entries is a fixed empty-state message,
/// never a bare empty list.
pub fn history_section(entries: &[&MoodEntry], now: DateTime<Utc>) -> String {
    if entries.is_empty() {
        return r#"<div class="empty-state">
    <div class="empty-state-icon">📝</div>
    <p>No mood history yet!</p>
    <p>You're a first-time user. Submit your first mood to get started!</p>
</div>"#
            .to_string();
    }

    let cards: String = entries.iter().map(|entry| mood_card(entry, now)).collect();

    format!(
        r#"<h3>Mood History</h3>
<div id="mood-list">
{cards}</div>"#
    )
}

fn mood_card(entry: &MoodEntry, now: DateTime<Utc>) -> String {
    let icon = mood_icon(&entry.mood);
    let formatted_time = format_relative(&entry.timestamp, now);

    format!(
        r#"<div class="mood-item">
    <div class="mood-item-content">
        <div class="mood-item-icon">{icon}</div>
        <div class="mood-item-details">
            <div class="mood-item-mood">{}</div>
            <div class="mood-item-name">{}</div>
            <div class="mood-item-timestamp">{}</div>
        </div>
    </div>
</div>
"#,
        html_escape(&entry.mood),
        html_escape(&entry.name),
        html_escape(&formatted_time),
    )
}
