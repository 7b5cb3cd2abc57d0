//! Conversion of host date/time values into epoch milliseconds.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use std::time::{SystemTime, UNIX_EPOCH};

/// A point in time that can report its offset from the Unix epoch in
/// milliseconds.
pub trait Timestamp {
    fn timestamp_millis(&self) -> i64;
}

/// Raw milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochMillis(pub i64);

impl Timestamp for EpochMillis {
    fn timestamp_millis(&self) -> i64 {
        self.0
    }
}

impl<Tz: TimeZone> Timestamp for DateTime<Tz> {
    fn timestamp_millis(&self) -> i64 {
        DateTime::timestamp_millis(self)
    }
}

/// Naive values carry no offset and are read as UTC.
impl Timestamp for NaiveDateTime {
    fn timestamp_millis(&self) -> i64 {
        self.and_utc().timestamp_millis()
    }
}

impl Timestamp for SystemTime {
    fn timestamp_millis(&self) -> i64 {
        match self.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
            Err(err) => {
                // Floor towards negative infinity, matching DateTime.
                let before = err.duration();
                let mut millis = before.as_millis();
                if before.subsec_nanos() % 1_000_000 != 0 {
                    millis += 1;
                }
                i64::try_from(millis).map(|m| -m).unwrap_or(i64::MIN)
            }
        }
    }
}

impl<T: Timestamp + ?Sized> Timestamp for &T {
    fn timestamp_millis(&self) -> i64 {
        (**self).timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use std::time::Duration;

    #[test]
    fn epoch_millis_passthrough() {
        assert_eq!(EpochMillis(1_234).timestamp_millis(), 1_234);
        assert_eq!(EpochMillis(-5).timestamp_millis(), -5);
    }

    #[test]
    fn datetime_matches_chrono() {
        let dt = "2016-07-16T15:21:00.250Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(Timestamp::timestamp_millis(&dt), 1_468_682_460_250);
    }

    #[test]
    fn fixed_offset_is_absolute() {
        let utc = "2026-02-12T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let shanghai = "2026-02-12T18:00:00+08:00"
            .parse::<DateTime<chrono::FixedOffset>>()
            .unwrap();
        assert_eq!(
            Timestamp::timestamp_millis(&utc),
            Timestamp::timestamp_millis(&shanghai)
        );
    }

    #[test]
    fn naive_read_as_utc() {
        let naive = NaiveDate::from_ymd_opt(1970, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 1)
            .unwrap();
        assert_eq!(Timestamp::timestamp_millis(&naive), 86_401_000);
    }

    #[test]
    fn system_time_after_epoch() {
        let t = UNIX_EPOCH + Duration::from_millis(42_000);
        assert_eq!(t.timestamp_millis(), 42_000);
    }

    #[test]
    fn system_time_before_epoch_floors() {
        let whole = UNIX_EPOCH - Duration::from_millis(3);
        assert_eq!(whole.timestamp_millis(), -3);

        let partial = UNIX_EPOCH - Duration::from_micros(1_500);
        assert_eq!(partial.timestamp_millis(), -2);
    }

    #[test]
    fn reference_forwards() {
        let t = EpochMillis(7);
        let r = &t;
        assert_eq!(Timestamp::timestamp_millis(&r), 7);
    }
}
