//! Relative timestamp formatting for article metadata.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

// Upstream sources sometimes deliver pre-formatted strings like "15h ago";
// those pass through untouched.
static RELATIVE_HINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)ago$|\b\d+\s*(sec|secs|second|seconds|min|mins|minute|minutes|h|hr|hrs|hour|hours|d|day|days)\b",
    )
    .unwrap()
});

/// Format a published-at value relative to the current wall clock.
pub fn format_relative_time(input: Option<&str>) -> String {
    relative_from(Utc::now(), input)
}

/// Deterministic core of [`format_relative_time`].
///
/// Empty input yields ""; already-relative strings and unparseable
/// timestamps are returned verbatim; future instants read as "Just now".
pub fn relative_from(now: DateTime<Utc>, input: Option<&str>) -> String {
    let Some(raw) = input else {
        return String::new();
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    if RELATIVE_HINT.is_match(raw) {
        return raw.to_string();
    }

    let Some(instant) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let diff = now.timestamp_millis() - instant.timestamp_millis();
    if diff < MINUTE_MS {
        return "Just now".to_string();
    }
    if diff < HOUR_MS {
        return format!("{} min ago", diff / MINUTE_MS);
    }
    if diff < DAY_MS {
        return format!("{} h ago", diff / HOUR_MS);
    }
    format!("{} d ago", diff / DAY_MS)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_and_missing_input_formats_as_empty() {
        assert_eq!(relative_from(now(), None), "");
        assert_eq!(relative_from(now(), Some("   ")), "");
    }

    #[test]
    fn already_relative_strings_pass_through() {
        assert_eq!(relative_from(now(), Some("15h ago")), "15h ago");
        assert_eq!(relative_from(now(), Some("1 d ago")), "1 d ago");
        assert_eq!(relative_from(now(), Some("3 mins")), "3 mins");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(relative_from(now(), Some("yesterday-ish")), "yesterday-ish");
    }

    #[test]
    fn iso_timestamps_format_by_magnitude() {
        assert_eq!(
            relative_from(now(), Some("2026-03-01T11:59:30Z")),
            "Just now"
        );
        assert_eq!(
            relative_from(now(), Some("2026-03-01T11:13:00Z")),
            "47 min ago"
        );
        assert_eq!(
            relative_from(now(), Some("2026-03-01T03:00:00Z")),
            "9 h ago"
        );
        assert_eq!(
            relative_from(now(), Some("2026-02-20T12:00:00Z")),
            "9 d ago"
        );
    }

    #[test]
    fn future_instants_read_as_just_now() {
        assert_eq!(
            relative_from(now(), Some("2026-03-02T00:00:00Z")),
            "Just now"
        );
    }
}
