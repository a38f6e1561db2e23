//! Human-friendly formatting helpers

use chrono::{DateTime, Datelike};
use std::time::Duration;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Relative-time wording for a duration, e.g. "4 minutes" or "an hour".
///
/// Each unit is rounded independently and the first bucket that fits wins:
/// under 45 seconds is "a few seconds", under 45 minutes counts minutes,
/// under 22 hours counts hours, under 26 days counts days, under 11 months
/// counts months, anything longer counts years.
pub fn humanize_duration(duration: Duration) -> String {
    let ms = duration.as_millis() as f64;
    let days_exact = ms / MS_PER_DAY;

    let seconds = (ms / 1_000.0).round() as u64;
    let minutes = (ms / 60_000.0).round() as u64;
    let hours = (ms / 3_600_000.0).round() as u64;
    let days = days_exact.round() as u64;
    let months = (days_exact * 4_800.0 / 146_097.0).round() as u64;
    let years = (days_exact * 400.0 / 146_097.0).round() as u64;

    if seconds < 45 {
        "a few seconds".to_string()
    } else if minutes <= 1 {
        "a minute".to_string()
    } else if minutes < 45 {
        format!("{} minutes", minutes)
    } else if hours <= 1 {
        "an hour".to_string()
    } else if hours < 22 {
        format!("{} hours", hours)
    } else if days <= 1 {
        "a day".to_string()
    } else if days < 26 {
        format!("{} days", days)
    } else if months <= 1 {
        "a month".to_string()
    } else if months < 11 {
        format!("{} months", months)
    } else if years <= 1 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    }
}

/// `YYYY-MM-DD` for an RFC 3339 timestamp; the zero time and junk give `None`
pub fn publish_date(raw: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(raw.trim()).ok()?;
    if parsed.year() <= 1 {
        return None;
    }
    Some(parsed.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_humanize_buckets() {
        assert_eq!(humanize_duration(secs(0)), "a few seconds");
        assert_eq!(humanize_duration(secs(44)), "a few seconds");
        assert_eq!(humanize_duration(secs(45)), "a minute");
        assert_eq!(humanize_duration(secs(89)), "a minute");
        assert_eq!(humanize_duration(secs(212)), "4 minutes");
        assert_eq!(humanize_duration(secs(44 * 60)), "44 minutes");
        assert_eq!(humanize_duration(secs(45 * 60)), "an hour");
        assert_eq!(humanize_duration(secs(3 * 3600)), "3 hours");
        assert_eq!(humanize_duration(secs(22 * 3600)), "a day");
        assert_eq!(humanize_duration(secs(5 * 86_400)), "5 days");
        assert_eq!(humanize_duration(secs(27 * 86_400)), "a month");
        assert_eq!(humanize_duration(secs(100 * 86_400)), "3 months");
        assert_eq!(humanize_duration(secs(365 * 86_400)), "a year");
        assert_eq!(humanize_duration(secs(3 * 365 * 86_400)), "3 years");
    }

    #[test]
    fn test_publish_date() {
        assert_eq!(
            publish_date("2009-10-25T06:57:33Z").as_deref(),
            Some("2009-10-25")
        );
        assert_eq!(publish_date("0001-01-01T00:00:00Z"), None);
        assert_eq!(publish_date(""), None);
        assert_eq!(publish_date("yesterday"), None);
    }
}
