//! Calendar-day bucketing.
//!
//! Every date-based aggregation in the crate groups by [`DayKey`]. Instants are
//! bucketed in the local timezone described by the injected [`Today`]
//! reference, so tests never depend on the machine clock.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveTime, Offset, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical key for one local calendar day. Orders chronologically and
/// renders as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The key `days` days before this one.
    pub fn days_before(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Signed day difference `self - other`.
    pub fn days_since(&self, other: DayKey) -> i64 {
        (self.0 - other.0).num_days()
    }

    /// Relative label used for agenda section headers.
    ///
    /// `Today`, `Tomorrow`, `Yesterday`, the weekday name when fewer than
    /// seven days away in either direction, otherwise `Weekday, Month Day`.
    pub fn relative_label(&self, today: DayKey) -> String {
        match self.days_since(today) {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            -1 => "Yesterday".to_string(),
            d if d.abs() < 7 => self.0.format("%A").to_string(),
            _ => self.0.format("%A, %B %-d").to_string(),
        }
    }

    /// Short weekday label (`Mon`, `Tue`, ...).
    pub fn short_weekday(&self) -> String {
        self.0.format("%a").to_string()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// The injected "current day": a local calendar date plus the UTC offset
/// used to bucket instants into local days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Today {
    date: NaiveDate,
    offset: FixedOffset,
}

impl Today {
    /// Read the system clock and local timezone.
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            date: now.date_naive(),
            offset: *now.offset(),
        }
    }

    /// A fixed day with instants bucketed in UTC.
    pub fn fixed(date: NaiveDate) -> Self {
        Self {
            date,
            offset: Utc.fix(),
        }
    }

    /// A fixed day with instants bucketed at the given offset.
    pub fn with_offset(date: NaiveDate, offset: FixedOffset) -> Self {
        Self { date, offset }
    }

    pub fn key(&self) -> DayKey {
        DayKey(self.date)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Local day key for an instant.
    pub fn day_key(&self, instant: DateTime<Utc>) -> DayKey {
        DayKey(instant.with_timezone(&self.offset).date_naive())
    }

    /// Local day key for an optional instant; `None` stays excluded.
    pub fn day_key_opt(&self, instant: Option<DateTime<Utc>>) -> Option<DayKey> {
        instant.map(|i| self.day_key(i))
    }
}

/// Parse a calendar date. Accepts `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Parse a wall-clock time, `HH:MM` or `HH:MM:SS`.
pub fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Minutes since midnight.
pub fn minutes_of(t: NaiveTime) -> i64 {
    i64::from(t.num_seconds_from_midnight() / 60)
}
