//! Elapsed time between two instants, and whole-unit counts of a raw
//! millisecond span.
//!
//! Every pair operation measures the absolute distance between its
//! arguments, so argument order never matters:
//!
//! ```rust
//! use durtext::{EpochMillis, interval_millis};
//!
//! let a = EpochMillis(1_000);
//! let b = EpochMillis(61_000);
//! assert_eq!(interval_millis(Some(a), Some(b)).unwrap(), 60_000);
//! assert_eq!(interval_millis(Some(b), Some(a)).unwrap(), 60_000);
//! ```

use crate::consts::{
    MILLISECOND_PER_DAY, MILLISECOND_PER_HOUR, MILLISECOND_PER_MINUTE, MILLISECOND_PER_SECOND,
    MILLISECOND_PER_WEEK,
};
use crate::error::{Error, Result};
use crate::instant::Timestamp;

/// Absolute number of milliseconds between `date1` and `date2`.
///
/// Fails with [`Error::NullArgument`] when either instant is absent; `date1`
/// is checked first. Spans wider than `i64::MAX` saturate.
pub fn interval_millis<A, B>(date1: Option<A>, date2: Option<B>) -> Result<i64>
where
    A: Timestamp,
    B: Timestamp,
{
    let date1 = date1.ok_or(Error::NullArgument { name: "date1" })?;
    let date2 = date2.ok_or(Error::NullArgument { name: "date2" })?;
    let diff = date2.timestamp_millis().abs_diff(date1.timestamp_millis());
    Ok(i64::try_from(diff).unwrap_or(i64::MAX))
}

/// Whole weeks in `millis`
pub fn interval_weeks(millis: i64) -> i64 {
    millis / MILLISECOND_PER_WEEK
}

/// Whole days in `millis`
pub fn interval_days(millis: i64) -> i64 {
    millis / MILLISECOND_PER_DAY
}

/// Whole hours in `millis`
pub fn interval_hours(millis: i64) -> i64 {
    millis / MILLISECOND_PER_HOUR
}

/// Whole minutes in `millis`
pub fn interval_minutes(millis: i64) -> i64 {
    millis / MILLISECOND_PER_MINUTE
}

/// Whole seconds in `millis`
pub fn interval_seconds(millis: i64) -> i64 {
    millis / MILLISECOND_PER_SECOND
}

/// Whole weeks between two instants.
pub fn interval_weeks_between<A, B>(date1: Option<A>, date2: Option<B>) -> Result<i64>
where
    A: Timestamp,
    B: Timestamp,
{
    interval_millis(date1, date2).map(interval_weeks)
}

/// Whole days between two instants.
///
/// ```rust
/// use chrono::NaiveDate;
/// use durtext::interval_days_between;
///
/// let a = NaiveDate::from_ymd_opt(2008, 8, 24).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let b = NaiveDate::from_ymd_opt(2008, 8, 27).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(interval_days_between(Some(a), Some(b)).unwrap(), 3);
/// ```
pub fn interval_days_between<A, B>(date1: Option<A>, date2: Option<B>) -> Result<i64>
where
    A: Timestamp,
    B: Timestamp,
{
    interval_millis(date1, date2).map(interval_days)
}

/// Whole hours between two instants.
pub fn interval_hours_between<A, B>(date1: Option<A>, date2: Option<B>) -> Result<i64>
where
    A: Timestamp,
    B: Timestamp,
{
    interval_millis(date1, date2).map(interval_hours)
}

/// Whole seconds between two instants.
pub fn interval_seconds_between<A, B>(date1: Option<A>, date2: Option<B>) -> Result<i64>
where
    A: Timestamp,
    B: Timestamp,
{
    interval_millis(date1, date2).map(interval_seconds)
}
