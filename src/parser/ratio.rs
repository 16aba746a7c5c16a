use winnow::ascii::{float, multispace0};
use winnow::combinator::{delimited, preceded};
use winnow::{ModalResult, Parser};

use crate::error::{HumanizeError, Result};
use crate::types::RatioInput;

/// Parse a percentage ("12.5%") or fraction ("3/4")
///
/// Any input containing `%` is read as a percentage: the first `%` is
/// removed and the leading number of what remains is taken, trailing text is
/// ignored. Otherwise any input containing `/` is read as a fraction from its
/// first two `/`-separated fields, each truncated toward zero; further fields
/// are ignored.
///
/// # Errors
/// * `HumanizeError::InvalidInput` - Neither form applies, a required number is
///   missing, or a value is not finite or does not fit `i64`
pub fn parse_ratio(input: &str) -> Result<RatioInput> {
    if input.contains('%') {
        let number = input.replacen('%', "", 1);
        let mut rest = number.as_str();
        let value = parse_leading_number
            .parse_next(&mut rest)
            .map_err(|e| invalid(input, e))?;

        if !value.is_finite() {
            return Err(HumanizeError::InvalidInput(format!(
                "percentage '{}' is not finite",
                input
            )));
        }
        Ok(RatioInput::Percent(value))
    } else if input.contains('/') {
        let mut fields = input.split('/');
        let numerator = fraction_field(input, fields.next())?;
        let denominator = fraction_field(input, fields.next())?;
        Ok(RatioInput::Fraction(numerator, denominator))
    } else {
        Err(HumanizeError::InvalidInput(format!(
            "'{}' is neither a percentage nor a fraction",
            input
        )))
    }
}

fn invalid(input: &str, e: impl std::fmt::Display) -> HumanizeError {
    HumanizeError::InvalidInput(format!("cannot parse '{}': {}", input, e))
}

/// Read one side of a fraction as an integer, dropping any decimal part
fn fraction_field(input: &str, field: Option<&str>) -> Result<i64> {
    let field = field.unwrap_or_default();
    let value = parse_fraction_value
        .parse(field)
        .map_err(|e| invalid(input, e))?
        .trunc();

    if value.is_nan() || value.abs() >= i64::MAX as f64 {
        return Err(HumanizeError::InvalidInput(format!(
            "fraction part '{}' of '{}' is out of range",
            field.trim(),
            input
        )));
    }
    Ok(value as i64)
}

/// Leading number after optional whitespace; the remainder is left unread
fn parse_leading_number(input: &mut &str) -> ModalResult<f64> {
    preceded(multispace0, float).parse_next(input)
}

/// A whole fraction field, surrounding whitespace allowed
fn parse_fraction_value(input: &mut &str) -> ModalResult<f64> {
    delimited(multispace0, float, multispace0).parse_next(input)
}
