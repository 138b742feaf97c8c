use super::*;

#[test]
fn date_part_of_iso_timestamp() {
    assert_eq!(format_date("2025-11-02T10:30:00"), "2025-11-02");
    assert_eq!(format_date("2025-11-02"), "2025-11-02");
    assert_eq!(format_date(""), "");
}

#[test]
fn datetime_trims_seconds() {
    assert_eq!(format_datetime("2025-11-02T10:30:00.123456"), "2025-11-02 10:30");
    assert_eq!(format_datetime("not a timestamp"), "not a timestamp");
}

#[test]
fn size_in_kb_with_one_decimal() {
    assert_eq!(format_size_kb(1024.0), "1.0 KB");
    assert_eq!(format_size_kb(150.0), "0.1 KB");
}

#[test]
fn confidence_as_whole_percent() {
    assert_eq!(format_confidence(0.87), "87%");
    assert_eq!(format_confidence(1.0), "100%");
}

#[test]
fn trend_keeps_sign() {
    assert_eq!(format_trend(4.25), "+4.2%");
    assert_eq!(format_trend(-8.3), "-8.3%");
    assert_eq!(format_trend(0.0), "+0.0%");
}
