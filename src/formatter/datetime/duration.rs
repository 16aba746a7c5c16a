use chrono::{DateTime, TimeZone};

use super::clock::Clock;
use crate::formatter::fraction::round_half_up;
use crate::locale::Vocabulary;

const JUST_NOW: &str = "just now";

/// Describe a duration in its coarsest whole unit
///
/// Units are fixed lengths (a month is 30 days, a year 365). The count is
/// rounded half up; below half a minute nothing rounds to one unit and the
/// result is "just now".
///
/// # Examples
/// ```
/// use humanize_format::formatter::humanize_duration;
///
/// assert_eq!(humanize_duration(90_000), "2 minutes");
/// assert_eq!(humanize_duration(3_600_000), "1 hour");
/// assert_eq!(humanize_duration(10_000), "just now");
/// ```
pub fn humanize_duration(duration_ms: u64) -> String {
    let vocabulary = Vocabulary::english();

    for unit in vocabulary.duration_units() {
        let count = round_half_up(duration_ms as f64 / unit.millis as f64);
        if count >= 1.0 {
            let plural = if count > 1.0 { "s" } else { "" };
            return format!("{} {}{}", count, unit.name, plural);
        }
    }

    JUST_NOW.to_string()
}

/// Describe how long ago `date` was, e.g. "3 days ago"
///
/// Instants that are not strictly in the past give "just now".
pub fn time_ago<Tz: TimeZone>(date: &DateTime<Tz>, clock: &impl Clock) -> String {
    let elapsed_ms = clock
        .now()
        .signed_duration_since(date)
        .num_milliseconds();

    match u64::try_from(elapsed_ms) {
        Ok(ms) if ms > 0 => format!("{} ago", humanize_duration(ms)),
        _ => JUST_NOW.to_string(),
    }
}

/// Describe how far ahead `date` is, e.g. "in 2 hours"
///
/// Instants that are not strictly in the future give "just now".
pub fn time_until<Tz: TimeZone>(date: &DateTime<Tz>, clock: &impl Clock) -> String {
    let remaining_ms = date
        .clone()
        .signed_duration_since(clock.now())
        .num_milliseconds();

    match u64::try_from(remaining_ms) {
        Ok(ms) if ms > 0 => format!("in {}", humanize_duration(ms)),
        _ => JUST_NOW.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_boundaries() {
        assert_eq!(humanize_duration(0), "just now");
        assert_eq!(humanize_duration(29_999), "just now");
        assert_eq!(humanize_duration(30_000), "1 minute");
        assert_eq!(humanize_duration(89_999), "1 minute");
        assert_eq!(humanize_duration(1_800_000), "1 hour");
    }

    #[test]
    fn test_coarsest_unit_wins() {
        let day = 86_400_000;
        assert_eq!(humanize_duration(3 * day), "3 days");
        assert_eq!(humanize_duration(3 * day - 1), "3 days");
        assert_eq!(humanize_duration(4 * day), "1 week");
        // Half a week already rounds to one week
        assert_eq!(humanize_duration(day * 7 / 2), "1 week");
        assert_eq!(humanize_duration(15 * day), "1 month");
        assert_eq!(humanize_duration(200 * day), "1 year");
        assert_eq!(humanize_duration(800 * day), "2 years");
    }
}
