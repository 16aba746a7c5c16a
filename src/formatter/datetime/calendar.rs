use chrono::Datelike;

use crate::formatter::ordinal::date_ordinal_suffix;
use crate::locale::Vocabulary;

/// Spell out a calendar date, e.g. "Monday, the 1st of January, 2024"
///
/// Components are read as stored in `date`; pass a `DateTime<Local>` for
/// local-time components.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use humanize_format::formatter::humanize_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(humanize_date(&date), "Monday, the 1st of January, 2024");
/// ```
pub fn humanize_date<D: Datelike>(date: &D) -> String {
    let vocabulary = Vocabulary::english();

    let day_of_week = vocabulary.day_name(date.weekday().num_days_from_sunday() as usize);
    let day_of_month = date_ordinal_suffix(i64::from(date.day()));
    let month = vocabulary.month_name(date.month0() as usize);

    format!(
        "{}, the {} of {}, {}",
        day_of_week,
        day_of_month,
        month,
        date.year()
    )
}
