use log::debug;

use super::utils::{gcd, round_half_up};
use crate::error::{HumanizeError, Result};
use crate::parser::parse_ratio;
use crate::types::{Conversion, Fraction, RatioInput};

/// Denominator bound used by [`find_closest_fraction`]
pub const DEFAULT_MAX_DENOMINATOR: u32 = 1000;

/// Reduce a fraction to lowest terms
///
/// `(0, 0)` has no divisor and is returned unchanged. The denominator sign is
/// whatever the Euclidean reduction leaves behind.
///
/// # Examples
/// ```
/// use humanize_format::formatter::simplify_fraction;
/// use humanize_format::types::Fraction;
///
/// assert_eq!(simplify_fraction(4, 8), Fraction::new(1, 2));
/// ```
pub fn simplify_fraction(numerator: i64, denominator: i64) -> Fraction {
    let divisor = gcd(numerator, denominator);
    if divisor == 0 {
        return Fraction::new(numerator, denominator);
    }

    Fraction::new(
        numerator.wrapping_div(divisor),
        denominator.wrapping_div(divisor),
    )
}

/// Closest fraction to `decimal` with a denominator up to 1000
///
/// # Examples
/// ```
/// use humanize_format::formatter::find_closest_fraction;
/// use humanize_format::types::Fraction;
///
/// assert_eq!(find_closest_fraction(0.5), Fraction::new(1, 2));
/// assert_eq!(find_closest_fraction(0.3333), Fraction::new(1, 3));
/// ```
pub fn find_closest_fraction(decimal: f64) -> Fraction {
    find_closest_fraction_within(decimal, DEFAULT_MAX_DENOMINATOR)
}

/// Closest fraction to `decimal` with a denominator in `1..=max_denominator`
///
/// Every denominator is tried with its numerator rounded to the nearest
/// integer. Candidates whose numerator does not fit `i64` are skipped. Ties
/// keep the smallest denominator. A candidate must beat the distance to `0/1`,
/// which is returned when none does.
pub fn find_closest_fraction_within(decimal: f64, max_denominator: u32) -> Fraction {
    let mut min_difference = decimal.abs();
    let mut closest = Fraction::new(0, 1);

    for denominator in 1..=max_denominator {
        let denominator_f = f64::from(denominator);
        let numerator = round_half_up(decimal * denominator_f);
        if numerator.is_nan() || numerator.abs() >= i64::MAX as f64 {
            continue;
        }
        let difference = (decimal - numerator / denominator_f).abs();

        if difference < min_difference {
            min_difference = difference;
            closest = Fraction::new(numerator as i64, i64::from(denominator));
        }
    }

    simplify_fraction(closest.numerator, closest.denominator)
}

/// Convert a percentage to a fraction or a fraction to a percentage
///
/// "50%" becomes the closest fraction `1/2`; "1/2" becomes the percentage
/// `50`. Both display the way they were written ("1/2", "50%").
///
/// # Errors
/// * `HumanizeError::InvalidInput` - The input is neither form, does not
///   parse, is a percentage beyond the `i64` range, or is a fraction with a
///   zero denominator
///
/// # Examples
/// ```
/// use humanize_format::formatter::convert_percentage_fraction;
///
/// assert_eq!(convert_percentage_fraction("50%").unwrap().to_string(), "1/2");
/// assert_eq!(convert_percentage_fraction("1/2").unwrap().to_string(), "50%");
/// assert!(convert_percentage_fraction("garbage").is_err());
/// ```
pub fn convert_percentage_fraction(input: &str) -> Result<Conversion> {
    let parsed = parse_ratio(input).inspect_err(|e| debug!("rejected ratio input: {}", e))?;

    match parsed {
        RatioInput::Percent(percent) => {
            let decimal = percent / 100.0;
            if decimal.abs() >= i64::MAX as f64 {
                return Err(HumanizeError::InvalidInput(format!(
                    "percentage '{}' is out of range",
                    input
                )));
            }
            Ok(Conversion::Fraction(find_closest_fraction(decimal)))
        }
        RatioInput::Fraction(_, 0) => Err(HumanizeError::InvalidInput(format!(
            "'{}' has a zero denominator",
            input
        ))),
        RatioInput::Fraction(numerator, denominator) => Ok(Conversion::Percentage(
            (numerator as f64 / denominator as f64) * 100.0,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_edge_cases() {
        assert_eq!(simplify_fraction(0, 0), Fraction::new(0, 0));
        assert_eq!(simplify_fraction(0, 7), Fraction::new(0, 1));
        assert_eq!(simplify_fraction(5, 0), Fraction::new(1, 0));
        assert_eq!(simplify_fraction(-4, 8), Fraction::new(1, -2));
        assert_eq!(simplify_fraction(4, -8), Fraction::new(1, -2));
    }

    #[test]
    fn test_no_candidate_beats_zero() {
        assert_eq!(find_closest_fraction(0.0), Fraction::new(0, 1));
        assert_eq!(find_closest_fraction_within(0.0001, 10), Fraction::new(0, 1));
        assert_eq!(find_closest_fraction_within(0.75, 0), Fraction::new(0, 1));
        assert_eq!(find_closest_fraction(f64::NAN), Fraction::new(0, 1));
    }

    #[test]
    fn test_tie_keeps_smallest_denominator() {
        // Later multiples of 1/4 only tie
        assert_eq!(find_closest_fraction_within(0.25, 100), Fraction::new(1, 4));
    }

    #[test]
    fn test_numerators_beyond_i64_skipped() {
        assert_eq!(find_closest_fraction(-1e19), Fraction::new(0, 1));
        assert_eq!(find_closest_fraction(1e19), Fraction::new(0, 1));
        // 4e18 fits at denominator 1 but not at 3
        assert_eq!(
            find_closest_fraction_within(4e18, 3),
            Fraction::new(4_000_000_000_000_000_000, 1)
        );
    }

    #[test]
    fn test_out_of_range_percentage_rejected() {
        let err = convert_percentage_fraction("1e21%").unwrap_err();
        assert!(matches!(err, HumanizeError::InvalidInput(_)));
        assert!(convert_percentage_fraction("-1e21%").is_err());
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let err = convert_percentage_fraction("3/0").unwrap_err();
        assert!(err.to_string().starts_with("Invalid input"));
    }
}
