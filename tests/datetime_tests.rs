use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use humanize_format::{
    Clock, FixedClock, SystemClock, humanize_date, humanize_duration, time_ago, time_until,
};

fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap())
}

// --- Durations ---
#[test]
fn test_duration_examples() {
    assert_eq!(humanize_duration(90_000), "2 minutes");
    assert_eq!(humanize_duration(10_000), "just now");
    assert_eq!(humanize_duration(60_000), "1 minute");
    assert_eq!(humanize_duration(2 * 3_600_000), "2 hours");
    assert_eq!(humanize_duration(2 * 604_800_000), "2 weeks");
    assert_eq!(humanize_duration(60 * 86_400_000), "2 months");
}

// --- Relative time ---
#[test]
fn test_time_ago() {
    let clock = clock();
    let past = clock.now() - Duration::hours(3);
    assert_eq!(time_ago(&past, &clock), "3 hours ago");

    let past = clock.now() - Duration::days(1);
    assert_eq!(time_ago(&past, &clock), "1 day ago");

    let past = clock.now() - Duration::seconds(5);
    assert_eq!(time_ago(&past, &clock), "just now ago");
}

#[test]
fn test_time_ago_not_in_past() {
    let clock = clock();
    assert_eq!(time_ago(&clock.now(), &clock), "just now");
    let future = clock.now() + Duration::days(2);
    assert_eq!(time_ago(&future, &clock), "just now");
}

#[test]
fn test_time_until() {
    let clock = clock();
    let future = clock.now() + Duration::minutes(20);
    assert_eq!(time_until(&future, &clock), "in 20 minutes");

    let future = clock.now() + Duration::days(14);
    assert_eq!(time_until(&future, &clock), "in 2 weeks");

    assert_eq!(time_until(&clock.now(), &clock), "just now");
    let past = clock.now() - Duration::days(2);
    assert_eq!(time_until(&past, &clock), "just now");
}

#[test]
fn test_relative_time_across_offsets() {
    let clock = clock();
    let offset = FixedOffset::east_opt(5 * 3600).unwrap();
    // 20:00 at +05:00 is 15:00 UTC
    let past: DateTime<FixedOffset> = offset.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();
    assert_eq!(time_ago(&past, &clock), "3 hours ago");
}

#[test]
fn test_system_clock_is_injectable() {
    let far_past = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    assert!(time_ago(&far_past, &SystemClock).ends_with("years ago"));
    assert_eq!(time_until(&far_past, &SystemClock), "just now");
}

// --- Calendar dates ---
#[test]
fn test_humanize_date() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(humanize_date(&date), "Monday, the 1st of January, 2024");

    let date = NaiveDate::from_ymd_opt(2023, 3, 12).unwrap();
    assert_eq!(humanize_date(&date), "Sunday, the 12th of March, 2023");

    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_eq!(humanize_date(&date), "Thursday, the 29th of February, 2024");

    let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
    assert_eq!(humanize_date(&date), "Friday, the 31st of December, 1999");

    let date = NaiveDate::from_ymd_opt(2024, 8, 22).unwrap();
    assert_eq!(humanize_date(&date), "Thursday, the 22nd of August, 2024");
}

#[test]
fn test_humanize_date_uses_stored_offset() {
    let offset = FixedOffset::west_opt(8 * 3600).unwrap();
    let utc = Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap();
    let local = utc.with_timezone(&offset);
    assert_eq!(humanize_date(&utc), "Monday, the 1st of January, 2024");
    assert_eq!(humanize_date(&local), "Sunday, the 31st of December, 2023");
}
