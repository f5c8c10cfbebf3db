#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Time helpers for reports.
//!
//! Every timestamp shown in a report is the UTC instant shifted by a fixed
//! eight hours. There is no daylight-saving handling and no per-repository
//! timezone.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Fixed shift applied to UTC instants before display.
pub const DISPLAY_OFFSET_HOURS: i64 = 8;

/// Format used for full timestamps in reports.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used for calendar days in headings, paths and front matter.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const WEEKDAYS: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];

#[must_use]
pub fn display_offset() -> Duration {
    Duration::hours(DISPLAY_OFFSET_HOURS)
}

/// Shift a UTC instant to display time.
#[must_use]
pub fn to_display(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.naive_utc() + display_offset()
}

/// Inverse of [`to_display`].
#[must_use]
pub fn from_display(local: NaiveDateTime) -> DateTime<Utc> {
    (local - display_offset()).and_utc()
}

/// Parse an RFC 3339 timestamp into a UTC instant.
#[must_use]
pub fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Convert an RFC 3339 UTC timestamp into display time, formatted as
/// `YYYY-MM-DD HH:MM:SS`.
///
/// Input that does not parse is handed back unchanged.
#[must_use]
pub fn utc_to_display(value: &str) -> String {
    parse_rfc3339(value).map_or_else(
        || value.to_string(),
        |instant| to_display(instant).format(DISPLAY_FORMAT).to_string(),
    )
}

/// Weekday label for a display-time timestamp, Monday first.
#[must_use]
pub fn weekday_label(local: &NaiveDateTime) -> &'static str {
    WEEKDAYS[local.weekday().num_days_from_monday() as usize]
}

/// Start of a report window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Earliest commit instant eligible for the report.
    pub since: DateTime<Utc>,
    /// Display date of the window start, used in titles and paths.
    pub start_date: NaiveDate,
}

impl Window {
    #[must_use]
    pub fn start_label(&self) -> String {
        self.start_date.format(DATE_FORMAT).to_string()
    }
}

/// The last 24 hours before `now`.
#[must_use]
pub fn daily_window(now: DateTime<Utc>) -> Window {
    let since = now - Duration::hours(24);
    Window {
        since,
        start_date: to_display(since).date(),
    }
}

/// Seven display days back from `now`, starting at display midnight.
#[must_use]
pub fn weekly_window(now: DateTime<Utc>) -> Window {
    let start_date = (to_display(now) - Duration::days(7)).date();
    Window {
        since: from_display(start_date.and_time(NaiveTime::MIN)),
        start_date,
    }
}
