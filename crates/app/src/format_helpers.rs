/// Shared formatting utilities for the UI layer.
use chrono::{DateTime, Utc};

/// Format a timestamp as "Jan 20, 2026 9:35 PM" (UTC, 12-hour time).
pub fn format_datetime_human(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Format a duration in minutes as "45 min" or "1 h 15 min".
pub fn format_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

/// Format an uptime in seconds as "3d 4h", "2h 5m" or "42s".
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{seconds}s")
    }
}
