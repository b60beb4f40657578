use super::*;

#[test]
fn unix_timestamps_bucket_by_utc_day() {
    let start = TimeKey::from_unix(1_704_067_200).unwrap();
    let end = TimeKey::from_unix(1_704_153_599).unwrap();
    let next = TimeKey::from_unix(1_704_153_600).unwrap();
    assert_eq!(start.as_str(), "2024-01-01");
    assert_eq!(start, end);
    assert_eq!(next.as_str(), "2024-01-02");
}

#[test]
fn negative_timestamps_resolve_before_epoch() {
    assert_eq!(TimeKey::from_unix(-1).unwrap().as_str(), "1969-12-31");
}

#[test]
fn out_of_range_timestamp_is_rejected() {
    assert!(TimeKey::from_unix(i64::MAX).unwrap_err().is_validation());
    assert_eq!(TimeKey::from_unix(253_402_300_799).unwrap().as_str(), "9999-12-31");
    assert!(TimeKey::from_unix(253_402_300_800).unwrap_err().is_validation());
}

#[test]
fn negative_years_pad_after_the_sign() {
    let date = Date::from_calendar_date(-5, time::Month::March, 7).unwrap();
    assert_eq!(TimeKey::from_date(date).as_str(), "-0005-03-07");
    let date = Date::from_calendar_date(-9999, time::Month::January, 1).unwrap();
    assert_eq!(TimeKey::from_date(date).as_str(), "-9999-01-01");
    assert_eq!(TimeKey::from_unix(-62_135_596_800).unwrap().as_str(), "0001-01-01");
}

#[test]
fn resolve_parses_seconds_and_defaults_to_today() {
    assert_eq!(
        TimeKey::resolve(Some("1704067200")).unwrap().as_str(),
        "2024-01-01"
    );
    assert!(TimeKey::resolve(Some("yesterday")).is_err());
    assert!(TimeKey::resolve(Some("1.5")).is_err());

    let today = TimeKey::now();
    let resolved = TimeKey::resolve(None).unwrap();
    // Tolerate a midnight rollover between the two calls.
    assert!(resolved == today || resolved == TimeKey::now());
    assert_eq!(TimeKey::resolve(Some("  ")).unwrap().as_str().len(), 10);
}

#[test]
fn day_strings_round_trip_through_parse() {
    let k: TimeKey = "2024-02-29".parse().unwrap();
    assert_eq!(k.to_string(), "2024-02-29");
    assert!("2023-02-29".parse::<TimeKey>().is_err());
    assert!("2024-1-1".parse::<TimeKey>().is_err());
}
