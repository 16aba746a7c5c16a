//! Ordinal suffixes
//!
//! Two independent rules live here. `ordinal_suffix` is the general
//! last-digit rule; `date_ordinal_suffix` is the table lookup used for days of
//! the month. They agree on 1..=31.

use crate::locale::Vocabulary;

/// Append the English ordinal suffix to `number`
///
/// Last two digits of 11, 12 or 13 always take "th".
///
/// # Examples
/// ```
/// use humanize_format::formatter::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(1), "1st");
/// assert_eq!(ordinal_suffix(112), "112th");
/// assert_eq!(ordinal_suffix(23), "23rd");
/// ```
pub fn ordinal_suffix(number: i64) -> String {
    let last_digit = number % 10;
    let last_two_digits = number % 100;

    let suffix = match (last_digit, last_two_digits) {
        (1, two) if two != 11 => "st",
        (2, two) if two != 12 => "nd",
        (3, two) if two != 13 => "rd",
        _ => "th",
    };

    format!("{}{}", number, suffix)
}

/// Append the ordinal suffix to a day of the month
///
/// Remainders 8..=15 of `day % 100` select the fallback entry, every other day
/// indexes the suffix table by its last digit.
pub fn date_ordinal_suffix(day: i64) -> String {
    let vocabulary = Vocabulary::english();
    format!("{}{}", day, vocabulary.ordinal_suffix(date_suffix_index(day)))
}

/// Index into the suffix table for `day`; out-of-table indexes fall back to "th"
fn date_suffix_index(day: i64) -> usize {
    let outside_teens = ((day % 100) >> 3) ^ 1;
    if outside_teens == 0 {
        return 0;
    }

    // Negative remainders never index the table
    usize::try_from(day % 10).unwrap_or(usize::MAX)
}
