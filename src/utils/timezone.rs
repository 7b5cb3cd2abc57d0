use chrono::offset::Offset;
use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone, Utc,
};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Zone in which calendar days are resolved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    pub fn parse(value: Option<&str>) -> Result<Self> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| Error::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }

    /// Calendar date of `utc` in this zone
    pub fn date_of(self, utc: DateTime<Utc>) -> NaiveDate {
        self.to_fixed_offset(utc).date_naive()
    }

    /// First instant of `date` in this zone.
    ///
    /// Normally local midnight. When midnight falls in a DST gap the first
    /// minute of the day that exists is used instead; an ambiguous midnight
    /// resolves to its earlier occurrence.
    pub fn start_of_day(self, date: NaiveDate) -> Result<DateTime<FixedOffset>> {
        let found = match self {
            Timezone::Local => first_valid_minute(&Local, date),
            Timezone::Named(tz) => first_valid_minute(&tz, date),
        };
        found.ok_or_else(|| Error::NonexistentLocalTime {
            date,
            timezone: self.to_string(),
        })
    }
}

fn first_valid_minute<Z: TimeZone>(tz: &Z, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
    let midnight = NaiveDateTime::new(date, NaiveTime::MIN);
    (0..24 * 60)
        .map(|minute| midnight + TimeDelta::minutes(minute))
        .take_while(|candidate| candidate.date() == date)
        .find_map(|candidate| earliest(tz.from_local_datetime(&candidate)))
}

fn earliest<Z: TimeZone>(resolved: LocalResult<DateTime<Z>>) -> Option<DateTime<FixedOffset>> {
    match resolved {
        LocalResult::Single(dt) => Some(dt.fixed_offset()),
        LocalResult::Ambiguous(earlier, _) => Some(earlier.fixed_offset()),
        LocalResult::None => None,
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timezone::Local => f.write_str("local"),
            Timezone::Named(tz) => f.write_str(tz.name()),
        }
    }
}
