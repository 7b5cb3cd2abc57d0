//! Whole-day ranges reset to local midnight, mostly for `BETWEEN ... AND ...`
//! style queries over "today" or "yesterday".

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::instant::Timestamp;
use crate::utils::Timezone;

/// Half-open `[start, end)` span covering one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl DayRange {
    /// The day `date` as seen in `tz`.
    pub fn for_date(date: NaiveDate, tz: Timezone) -> Result<Self> {
        let next = date.succ_opt().ok_or(Error::InvalidArgument {
            name: "date",
            reason: "has no following day",
        })?;
        let range = DayRange {
            start: tz.start_of_day(date)?,
            end: tz.start_of_day(next)?,
        };
        log::debug!(
            "day range for {} in {}: {} .. {}",
            date,
            tz,
            range.start,
            range.end
        );
        Ok(range)
    }

    /// Whether `instant` falls in `[start, end)`
    pub fn contains<T: Timestamp>(&self, instant: &T) -> bool {
        let millis = instant.timestamp_millis();
        self.start.timestamp_millis() <= millis && millis < self.end.timestamp_millis()
    }
}

/// Midnight today and midnight tomorrow.
///
/// If it is 2012-10-16 22:18:34 in `tz`, the range is
/// `2012-10-16 00:00:00` .. `2012-10-17 00:00:00`.
pub fn reset_today_and_tomorrow<C: Clock + ?Sized>(clock: &C, tz: Timezone) -> Result<DayRange> {
    let today = tz.date_of(clock.now());
    DayRange::for_date(today, tz)
}

/// Midnight yesterday and midnight today.
pub fn reset_yesterday_and_today<C: Clock + ?Sized>(clock: &C, tz: Timezone) -> Result<DayRange> {
    let today = tz.date_of(clock.now());
    let yesterday = today.pred_opt().ok_or(Error::InvalidArgument {
        name: "date",
        reason: "has no preceding day",
    })?;
    DayRange::for_date(yesterday, tz)
}
