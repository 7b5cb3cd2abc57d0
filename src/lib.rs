//! Compact duration formatting and date-interval helpers.
//!
//! Durations render with the largest applicable units down to
//! milliseconds, using fixed Chinese labels (`天`, `小时`, `分钟`, `秒`,
//! `毫秒`) and skipping zero components:
//!
//! ```rust
//! use durtext::format_duration;
//!
//! let ms = ((((6 * 24 + 13) * 60 + 3) * 60 + 53) * 1_000) + 259;
//! assert_eq!(format_duration(ms).unwrap(), "6天13小时3分钟53秒259毫秒");
//! ```
//!
//! The crate also offers whole-day ranges reset to midnight in a chosen
//! zone, and a sequence membership test that compares elements by their
//! textual value.

mod clock;
mod config;
mod consts;
mod duration;
mod error;
mod instant;
mod interval;
mod range;
mod scan;
mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use consts::{
    MILLISECOND_PER_DAY, MILLISECOND_PER_HOUR, MILLISECOND_PER_MINUTE, MILLISECOND_PER_SECOND,
    MILLISECOND_PER_WEEK,
};
pub use duration::{
    DurationParts, format_duration, format_duration_between, format_duration_since,
    format_duration_since_with,
};
pub use error::{Error, Result};
pub use instant::{EpochMillis, Timestamp};
pub use interval::{
    interval_days, interval_days_between, interval_hours, interval_hours_between, interval_millis,
    interval_minutes, interval_seconds, interval_seconds_between, interval_weeks,
    interval_weeks_between,
};
pub use range::{DayRange, reset_today_and_tomorrow, reset_yesterday_and_today};
pub use scan::{contains_by_string_value, string_value};
pub use utils::{MaybeIter, Timezone};
