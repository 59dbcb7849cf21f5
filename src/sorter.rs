//!
//! Comparators used to order table columns
//!

use std::cmp::Ordering;
use time::{macros::format_description, PrimitiveDateTime};

///
/// Compares two strings lexicographically
///
pub fn string(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

///
/// Compares any two partially ordered values.
/// Incomparable values are treated as equal
///
pub fn default<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

///
/// Compares two `sent_at` timestamps chronologically.
/// Values that don't parse fall back to lexicographic order
///
pub fn date(a: &str, b: &str) -> Ordering {
    match (parse_sent_at(a), parse_sent_at(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

fn parse_sent_at(value: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z"),
    )
    .ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn string_orders_lexicographically() {
        assert_eq!(string("+48100000001", "+48100000002"), Ordering::Less);
        assert_eq!(string("b", "a"), Ordering::Greater);
        assert_eq!(string("a", "a"), Ordering::Equal);
    }

    #[test]
    fn default_orders_numbers() {
        assert_eq!(default(&1, &2), Ordering::Less);
        assert_eq!(default(&2.5, &2.5), Ordering::Equal);
    }

    #[test]
    fn default_incomparable_equal() {
        assert_eq!(default(&f64::NAN, &1.0), Ordering::Equal);
    }

    #[test]
    fn date_orders_chronologically() {
        let earlier = "2024-08-10T09:30:00Z";
        let later = "2024-08-10T09:30:01Z";

        assert_eq!(date(earlier, later), Ordering::Less);
        assert_eq!(date(later, earlier), Ordering::Greater);
        assert_eq!(date(earlier, earlier), Ordering::Equal);
    }

    #[test]
    fn date_unparseable_falls_back_to_lexicographic() {
        assert_eq!(date("not a date", "2024-08-10T09:30:00Z"), Ordering::Greater);
    }
}
