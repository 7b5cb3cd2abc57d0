/// Milliseconds in one second
pub const MILLISECOND_PER_SECOND: i64 = 1_000;

/// Milliseconds in one minute: 60_000
pub const MILLISECOND_PER_MINUTE: i64 = 60 * MILLISECOND_PER_SECOND;

/// Milliseconds in one hour: 3_600_000
pub const MILLISECOND_PER_HOUR: i64 = 60 * MILLISECOND_PER_MINUTE;

/// Milliseconds in one day: 86_400_000
pub const MILLISECOND_PER_DAY: i64 = 24 * MILLISECOND_PER_HOUR;

/// Milliseconds in one week: 604_800_000
pub const MILLISECOND_PER_WEEK: i64 = 7 * MILLISECOND_PER_DAY;

pub(crate) const DAY: &str = "天";
pub(crate) const HOUR: &str = "小时";
pub(crate) const MINUTE: &str = "分钟";
pub(crate) const SECOND: &str = "秒";
pub(crate) const MILLISECOND: &str = "毫秒";

/// Rendered for a zero-length duration
pub(crate) const ZERO: &str = "0";

/// Stand-in text for an absent value when comparing by string value
pub(crate) const NULL: &str = "null";
