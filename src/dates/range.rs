use chrono::{Datelike, NaiveDate};

/// Parses a `DD/MM/YYYY` date. Day and month may omit their leading zero and
/// the year may be shorter than four digits; all three groups are padded
/// before the calendar date is built. Returns `None` for anything that is not
/// three slash-separated digit groups or that names a day the month does not
/// have (`31/02/2024`).
pub fn parse(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('/');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let day = digits(day, 2)?;
    let month = digits(month, 2)?;
    let year = digits(year, 4)?;

    // from_ymd_opt rejects day 0, month 13 and 30/02 instead of rolling over.
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Renders a date as zero-padded `DD/MM/YYYY`.
pub fn format(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// Re-renders user input in canonical form, e.g. `1/6/2024` -> `01/06/2024`.
pub fn normalize(text: &str) -> Option<String> {
    parse(text).map(format)
}

/// True when both dates parse and `end` is not before `start`.
/// A single-day trip (start == end) is valid.
pub fn is_range_valid(start: &str, end: &str) -> bool {
    match (parse(start), parse(end)) {
        (Some(s), Some(e)) => e >= s,
        _ => false,
    }
}

/// Inclusive number of calendar days covered by a valid range.
pub fn trip_days(start: &str, end: &str) -> Option<i64> {
    let s = parse(start)?;
    let e = parse(end)?;
    if e < s {
        return None;
    }
    Some(e.signed_duration_since(s).num_days() + 1)
}

fn digits(group: &str, max_len: usize) -> Option<u32> {
    if group.is_empty() || group.len() > max_len || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    group.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_canonical_form() {
        assert_eq!(parse("15/06/2024"), Some(d(2024, 6, 15)));
        assert_eq!(parse("01/01/2025"), Some(d(2025, 1, 1)));
    }

    #[test]
    fn test_parse_pads_missing_leading_zeros() {
        assert_eq!(parse("1/6/2024"), Some(d(2024, 6, 1)));
        assert_eq!(parse("9/12/2024"), Some(d(2024, 12, 9)));
        assert_eq!(parse("05/3/2024"), Some(d(2024, 3, 5)));
    }

    #[test]
    fn test_parse_rejects_day_past_month_end() {
        assert_eq!(parse("31/02/2024"), None);
        assert_eq!(parse("30/02/2024"), None);
        assert_eq!(parse("31/04/2024"), None);
        assert_eq!(parse("32/01/2024"), None);
    }

    #[test]
    fn test_parse_leap_years() {
        assert_eq!(parse("29/02/2024"), Some(d(2024, 2, 29)));
        assert_eq!(parse("29/02/2023"), None);
        assert_eq!(parse("29/02/1900"), None);
        assert_eq!(parse("29/02/2000"), Some(d(2000, 2, 29)));
    }

    #[test]
    fn test_parse_rejects_zero_day_and_month() {
        assert_eq!(parse("00/05/2024"), None);
        assert_eq!(parse("10/00/2024"), None);
        assert_eq!(parse("10/13/2024"), None);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in [
            "",
            "2024-06-15",
            "15/06",
            "15/06/2024/1",
            "15-06-2024",
            "aa/bb/cccc",
            "15/06/20245",
            "150/06/2024",
            "15/006/2024",
            " 15/06/2024",
            "15/06/2024 ",
            "+1/06/2024",
            "-1/06/2024",
            "15//2024",
            "/06/2024",
            "15/06/",
        ] {
            assert_eq!(parse(bad), None, "expected {bad:?} to be rejected");
        }
    }

    #[test]
    fn test_format_zero_pads() {
        assert_eq!(format(d(2024, 6, 1)), "01/06/2024");
        assert_eq!(format(d(2024, 12, 25)), "25/12/2024");
        assert_eq!(format(d(987, 3, 4)), "04/03/0987");
    }

    #[test]
    fn test_parse_format_roundtrip_over_leap_year() {
        let mut current = d(2024, 1, 1);
        while current <= d(2024, 12, 31) {
            assert_eq!(parse(&format(current)), Some(current));
            current = current.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("1/6/2024").as_deref(), Some("01/06/2024"));
        assert_eq!(normalize("31/02/2024"), None);
    }

    #[test]
    fn test_is_range_valid() {
        assert!(!is_range_valid("10/05/2024", "09/05/2024"));
        assert!(is_range_valid("10/05/2024", "10/05/2024"));
        assert!(is_range_valid("10/05/2024", "11/05/2024"));
        assert!(is_range_valid("31/12/2024", "01/01/2025"));
    }

    #[test]
    fn test_is_range_valid_requires_both_dates() {
        assert!(!is_range_valid("", "10/05/2024"));
        assert!(!is_range_valid("10/05/2024", ""));
        assert!(!is_range_valid("10/05/2024", "31/02/2024"));
    }

    #[test]
    fn test_trip_days_inclusive() {
        assert_eq!(trip_days("10/05/2024", "10/05/2024"), Some(1));
        assert_eq!(trip_days("10/05/2024", "17/05/2024"), Some(8));
        assert_eq!(trip_days("28/02/2024", "01/03/2024"), Some(3));
    }

    #[test]
    fn test_trip_days_invalid_range() {
        assert_eq!(trip_days("10/05/2024", "09/05/2024"), None);
        assert_eq!(trip_days("", "09/05/2024"), None);
    }
}
