// src/application/formatting.rs
//! Display helpers shared by the DTO mappers.

use chrono::{DateTime, Utc};

/// `45 min`, `2h`, `1h 5m`.
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {rest}m")
    }
}

/// Long US-style date, e.g. `January 5, 2024`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Coarse "time ago" label relative to `now`. Anything four weeks or older
/// falls back to [`format_date`].
pub fn format_relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - date).num_seconds();
    if seconds < 60 {
        return "just now".into();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return ago(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return ago(hours, "hour");
    }

    let days = hours / 24;
    if days < 7 {
        return ago(days, "day");
    }

    let weeks = days / 7;
    if weeks < 4 {
        return ago(weeks, "week");
    }

    format_date(date)
}

fn ago(n: i64, unit: &str) -> String {
    let plural = if n == 1 { "" } else { "s" };
    format!("{n} {unit}{plural} ago")
}

/// Cuts `text` to at most `max_chars` characters and appends `...` when
/// anything was removed.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
