use super::*;

#[test]
fn percent_uses_one_decimal() {
    assert_eq!(percent(0.8734), "87.3%");
    assert_eq!(percent(1.0), "100.0%");
    assert_eq!(percent(0.0), "0.0%");
}

#[test]
fn split_timestamp_extracts_date_and_minutes() {
    assert_eq!(
        split_timestamp("2026-01-31T10:20:30.123456"),
        ("2026-01-31".to_owned(), "10:20".to_owned())
    );
}

#[test]
fn split_timestamp_handles_short_and_missing_times() {
    let (date, time) = split_timestamp("2026-01-31T9");
    assert_eq!((date.as_str(), time.as_str()), ("2026-01-31", "9"));
    let (date, time) = split_timestamp("2026-01-31");
    assert_eq!(date, "2026-01-31");
    assert!(time.is_empty());
}
