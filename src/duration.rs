//! Compact, human-readable rendering of elapsed time.
//!
//! A duration is split along the ladder day > hour > minute > second >
//! millisecond and every non-zero component is written as `<value><label>`
//! with no separators. Months and years are never used.
//!
//! ```rust
//! use durtext::format_duration;
//!
//! assert_eq!(format_duration(13_516).unwrap(), "13秒516毫秒");
//! assert_eq!(format_duration(0).unwrap(), "0");
//! ```

use std::fmt;

use crate::clock::{Clock, SystemClock};
use crate::consts::{
    DAY, HOUR, MILLISECOND, MILLISECOND_PER_DAY, MILLISECOND_PER_HOUR, MILLISECOND_PER_MINUTE,
    MILLISECOND_PER_SECOND, MINUTE, SECOND, ZERO,
};
use crate::error::{Error, Result};
use crate::instant::Timestamp;
use crate::interval::{
    interval_days, interval_hours, interval_millis, interval_minutes, interval_seconds,
};

/// A non-negative duration split into whole units.
///
/// Only built through [`DurationParts::from_millis`], so every component is
/// non-negative and all but `days` stay below their unit's carry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DurationParts {
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    millis: i64,
}

impl DurationParts {
    /// Splits `millis` into days, hours, minutes, seconds and milliseconds.
    ///
    /// Fails with [`Error::InvalidArgument`] when `millis` is negative.
    pub fn from_millis(millis: i64) -> Result<Self> {
        if millis < 0 {
            return Err(Error::InvalidArgument {
                name: "millis",
                reason: "can't be negative",
            });
        }

        let days = interval_days(millis);
        let rest = millis - days * MILLISECOND_PER_DAY;
        let hours = interval_hours(rest);
        let rest = rest - hours * MILLISECOND_PER_HOUR;
        let minutes = interval_minutes(rest);
        let rest = rest - minutes * MILLISECOND_PER_MINUTE;
        let seconds = interval_seconds(rest);
        let millis = rest - seconds * MILLISECOND_PER_SECOND;

        Ok(DurationParts {
            days,
            hours,
            minutes,
            seconds,
            millis,
        })
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Sub-second remainder
    pub fn millis(&self) -> i64 {
        self.millis
    }

    /// Total milliseconds these parts add up to; always the value passed to
    /// [`DurationParts::from_millis`].
    pub fn to_millis(&self) -> i64 {
        (((self.days * 24 + self.hours) * 60 + self.minutes) * 60 + self.seconds) * 1_000
            + self.millis
    }

    /// Whether every component is zero
    pub fn is_zero(&self) -> bool {
        *self == DurationParts::default()
    }

    fn components(&self) -> [(i64, &'static str); 5] {
        [
            (self.days, DAY),
            (self.hours, HOUR),
            (self.minutes, MINUTE),
            (self.seconds, SECOND),
            (self.millis, MILLISECOND),
        ]
    }
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str(ZERO);
        }
        for (value, label) in self.components() {
            if value != 0 {
                write!(f, "{value}{label}")?;
            }
        }
        Ok(())
    }
}

/// Formats a millisecond count, e.g. `13516` → `"13秒516毫秒"`.
///
/// Returns `"0"` for zero and [`Error::InvalidArgument`] for negative input.
pub fn format_duration(millis: i64) -> Result<String> {
    DurationParts::from_millis(millis).map(|parts| parts.to_string())
}

/// Formats the absolute span between `start` and `end`.
///
/// ```rust
/// use chrono::NaiveDateTime;
/// use durtext::format_duration_between;
///
/// let start = NaiveDateTime::parse_from_str("2011-05-19 08:30:40", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2011-05-19 11:30:24", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(format_duration_between(Some(start), Some(end)).unwrap(), "2小时59分钟44秒");
/// ```
pub fn format_duration_between<A, B>(start: Option<A>, end: Option<B>) -> Result<String>
where
    A: Timestamp,
    B: Timestamp,
{
    format_duration(interval_millis(start, end)?)
}

/// Formats the absolute span between `start` and the current system time.
///
/// Typically used to report how long a piece of work took.
pub fn format_duration_since<A: Timestamp>(start: Option<A>) -> Result<String> {
    format_duration_since_with(&SystemClock, start)
}

/// Same as [`format_duration_since`], reading "now" from `clock` once.
pub fn format_duration_since_with<C, A>(clock: &C, start: Option<A>) -> Result<String>
where
    C: Clock + ?Sized,
    A: Timestamp,
{
    let now = clock.now();
    format_duration_between(start, Some(now))
}
