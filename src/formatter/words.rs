//! Number to English words
//!
//! The number is split into base-1000 groups from the least significant end.
//! Each nonzero group is spelled out and followed by its scale word, and the
//! group phrases are joined most significant first with ", ".

use log::debug;

use crate::error::{HumanizeError, Result};
use crate::locale::Vocabulary;

/// Exclusive upper bound accepted by [`humanize_number`] (18 sextillion)
pub const NUMBER_CEILING: u128 = 18_000_000_000_000_000_000_000;

/// Spell out a non-negative integer in English words
///
/// Zero spells as the empty string.
///
/// # Errors
/// * `HumanizeError::NumberTooLarge` - `number` is at or above [`NUMBER_CEILING`]
///
/// # Examples
/// ```
/// use humanize_format::formatter::humanize_number;
///
/// assert_eq!(
///     humanize_number(1234).unwrap(),
///     "one thousand, two hundred and thirty four"
/// );
/// assert!(humanize_number(18_000_000_000_000_000_000_000).is_err());
/// ```
pub fn humanize_number(number: u128) -> Result<String> {
    if number >= NUMBER_CEILING {
        debug!("refusing to spell out {}: at or above ceiling", number);
        return Err(HumanizeError::NumberTooLarge { value: number });
    }

    let vocabulary = Vocabulary::english();
    let mut groups: Vec<String> = Vec::new();
    let mut remaining = number;
    let mut group_index = 0;

    while remaining > 0 {
        // Always below 1000
        let group_value = (remaining % 1000) as usize;

        if group_value > 0 {
            let mut phrase = group_to_words(group_value, vocabulary);
            let scale = vocabulary.scale(group_index);
            if !scale.is_empty() {
                phrase.push(' ');
                phrase.push_str(scale);
            }
            groups.push(phrase);
        }

        remaining /= 1000;
        group_index += 1;
    }

    groups.reverse();
    Ok(groups.join(", "))
}

/// Spell out a value in 0..1000
fn group_to_words(n: usize, vocabulary: &Vocabulary) -> String {
    match n {
        0..=9 => vocabulary.one(n).to_string(),
        10..=19 => vocabulary.teen(n - 10).to_string(),
        20..=99 => {
            let tens = vocabulary.ten(n / 10);
            if n % 10 > 0 {
                format!("{} {}", tens, vocabulary.one(n % 10))
            } else {
                tens.to_string()
            }
        }
        100..=999 => {
            let hundreds = format!("{} {}", vocabulary.one(n / 100), vocabulary.hundred());
            if n % 100 > 0 {
                format!(
                    "{} {} {}",
                    hundreds,
                    vocabulary.conjunction(),
                    group_to_words(n % 100, vocabulary)
                )
            } else {
                hundreds
            }
        }
        _ => String::new(),
    }
}
