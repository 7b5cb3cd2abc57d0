use durtext::{DurationParts, EpochMillis, format_duration, interval_millis};
use proptest::prelude::*;

const LABELS: [&str; 5] = ["天", "小时", "分钟", "秒", "毫秒"];

proptest! {
    /// Parts add back up to the input millisecond count.
    #[test]
    fn parts_reconstruct(ms in 0i64..=i64::MAX / 2) {
        let p = DurationParts::from_millis(ms).unwrap();
        let rebuilt = (((p.days() * 24 + p.hours()) * 60 + p.minutes()) * 60 + p.seconds())
            * 1000
            + p.millis();
        prop_assert_eq!(rebuilt, ms);
        prop_assert!(p.hours() < 24 && p.minutes() < 60 && p.seconds() < 60 && p.millis() < 1000);
    }

    /// Only non-zero components are written, in descending order.
    #[test]
    fn zero_units_never_rendered(ms in 1i64..10_000_000_000_000) {
        let p = DurationParts::from_millis(ms).unwrap();
        let expected: String = [p.days(), p.hours(), p.minutes(), p.seconds(), p.millis()]
            .iter()
            .zip(LABELS)
            .filter(|(value, _)| **value != 0)
            .map(|(value, label)| format!("{value}{label}"))
            .collect();
        prop_assert_eq!(format_duration(ms).unwrap(), expected);
    }

    /// Negative durations are always rejected.
    #[test]
    fn negative_rejected(ms in i64::MIN..0) {
        prop_assert!(format_duration(ms).is_err());
    }

    /// Elapsed time ignores argument order.
    #[test]
    fn interval_symmetric(a in any::<i64>(), b in any::<i64>()) {
        let forward = interval_millis(Some(EpochMillis(a)), Some(EpochMillis(b))).unwrap();
        let backward = interval_millis(Some(EpochMillis(b)), Some(EpochMillis(a))).unwrap();
        prop_assert_eq!(forward, backward);
        prop_assert!(forward >= 0);
    }
}
