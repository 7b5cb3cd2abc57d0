//! Membership test by textual value over a single-pass sequence.

use std::borrow::Cow;
use std::fmt::Display;

use crate::consts::NULL;
use crate::utils::MaybeIter;

/// Text used when comparing `value`: its `Display` form, or `"null"` when
/// absent.
pub fn string_value<T: Display>(value: Option<T>) -> Cow<'static, str> {
    match value {
        Some(v) => Cow::Owned(v.to_string()),
        None => Cow::Borrowed(NULL),
    }
}

/// Whether any element of `sequence` renders to the same text as `probe`.
///
/// Absent values on either side render as `"null"`, so an absent probe
/// matches an absent element. An absent or empty sequence yields `false`.
/// Elements are consumed in order and scanning stops at the first match;
/// pass `&mut iter` to keep the remainder.
///
/// ```rust
/// use durtext::contains_by_string_value;
///
/// let seq = ["1", "2", "3"].map(Some);
/// assert!(contains_by_string_value(Some(seq), Some(2)));
/// assert!(!contains_by_string_value(Some(seq), Some(4)));
/// assert!(contains_by_string_value(Some([None, Some("a")]), None::<&str>));
/// ```
pub fn contains_by_string_value<I, T, P>(sequence: Option<I>, probe: Option<P>) -> bool
where
    I: IntoIterator<Item = Option<T>>,
    T: Display,
    P: Display,
{
    let mut elements = MaybeIter::new(sequence.map(IntoIterator::into_iter));
    if elements.is_absent() {
        return false;
    }
    let probe = string_value(probe);
    elements.any(|element| string_value(element) == probe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_sequence() {
        assert!(!contains_by_string_value(None::<Vec<Option<&str>>>, Some("x")));
        assert!(!contains_by_string_value(None::<Vec<Option<&str>>>, None::<&str>));
    }

    #[test]
    fn empty_sequence() {
        let empty: Vec<Option<&str>> = Vec::new();
        assert!(!contains_by_string_value(Some(empty), Some("x")));
    }

    #[test]
    fn null_probe_matches_null_element() {
        assert!(contains_by_string_value(
            Some(vec![None, Some("a")]),
            None::<&str>
        ));
    }

    #[test]
    fn null_is_the_word_null() {
        assert!(contains_by_string_value(Some(vec![Some("null")]), None::<&str>));
        assert!(contains_by_string_value(Some(vec![None::<i32>]), Some("null")));
        assert!(!contains_by_string_value(Some(vec![Some("")]), None::<&str>));
        assert!(!contains_by_string_value(Some(vec![None::<&str>]), Some("")));
    }

    #[test]
    fn numeric_probe_matches_text() {
        let seq = vec![Some("1"), Some("2"), Some("3")];
        assert!(contains_by_string_value(Some(seq), Some(2)));
    }

    #[test]
    fn no_match() {
        let seq = vec![Some(1.5), Some(2.0)];
        assert!(!contains_by_string_value(Some(seq), Some("2.0")));
        assert!(contains_by_string_value(Some(vec![Some(1.5)]), Some("1.5")));
    }

    #[test]
    fn stops_at_first_match() {
        let mut iter = vec![Some("a"), Some("b"), Some("c"), Some("d")].into_iter();
        assert!(contains_by_string_value(Some(&mut iter), Some("b")));
        assert_eq!(iter.next(), Some(Some("c")));
    }

    #[test]
    fn exhausts_without_match() {
        let mut iter = vec![Some("a"), Some("b")].into_iter();
        assert!(!contains_by_string_value(Some(&mut iter), Some("z")));
        assert_eq!(iter.next(), None);
        // second scan sees an exhausted sequence
        assert!(!contains_by_string_value(Some(&mut iter), Some("a")));
    }

    #[test]
    fn string_value_rules() {
        assert_eq!(string_value(Some(42)), "42");
        assert_eq!(string_value(None::<i32>), "null");
        assert_eq!(string_value(Some('x')), "x");
    }
}
