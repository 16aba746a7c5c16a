//! Type definitions for the humanize helpers
//!
//! This module defines the transient values passed into and returned from the
//! formatting functions: template substitutions, fractions, duration units and
//! percentage/fraction conversions.

use std::fmt;

/// A plain value substituted into a template
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValue {
    /// Numeric value, also the only kind that can act as a count
    Number(f64),
    /// Text rendered verbatim
    Text(String),
}

impl TemplateValue {
    /// Returns the numeric value if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TemplateValue::Number(n) => Some(*n),
            TemplateValue::Text(_) => None,
        }
    }
}

impl fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateValue::Number(n) => write!(f, "{}", n),
            TemplateValue::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_template_value_from {
    ($($ty:ty => $conv:expr),* $(,)?) => {
        $(
            impl From<$ty> for TemplateValue {
                fn from(value: $ty) -> Self {
                    $conv(value)
                }
            }

            impl From<$ty> for Substitution {
                fn from(value: $ty) -> Self {
                    Substitution::Literal(TemplateValue::from(value))
                }
            }
        )*
    };
}

impl_template_value_from! {
    f64 => TemplateValue::Number,
    i64 => |v: i64| TemplateValue::Number(v as f64),
    i32 => |v: i32| TemplateValue::Number(f64::from(v)),
    u32 => |v: u32| TemplateValue::Number(f64::from(v)),
    usize => |v: usize| TemplateValue::Number(v as f64),
    String => TemplateValue::Text,
    &str => |v: &str| TemplateValue::Text(v.to_string()),
}

/// A single substitution slot of a template
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution {
    /// A value stringified as-is
    Literal(TemplateValue),
    /// Singular and plural forms, resolved against the nearest preceding count
    PluralPair {
        /// Text used when the count is exactly 1
        singular: String,
        /// Text used for every other count
        plural: String,
    },
}

impl Substitution {
    /// Shorthand for a pluralization pair
    pub fn plural(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Substitution::PluralPair {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Returns the count carried by this substitution, if it is numeric
    pub fn count(&self) -> Option<f64> {
        match self {
            Substitution::Literal(value) => value.as_number(),
            Substitution::PluralPair { .. } => None,
        }
    }
}

impl From<TemplateValue> for Substitution {
    fn from(value: TemplateValue) -> Self {
        Substitution::Literal(value)
    }
}

/// A numerator/denominator pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    /// The numerator
    pub numerator: i64,
    /// The denominator
    pub denominator: i64,
}

impl Fraction {
    /// Create a fraction without reducing it
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The value of the fraction as a float
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Split into `(numerator, denominator)`
    pub fn into_parts(self) -> (i64, i64) {
        (self.numerator, self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A named unit of time with its fixed length in milliseconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationUnit {
    /// Singular unit name, e.g. "week"
    pub name: String,
    /// Length of one unit in milliseconds
    pub millis: u64,
}

/// Outcome of a percentage/fraction conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// A percentage input approximated as a fraction
    Fraction(Fraction),
    /// A fraction input expressed as a percentage
    Percentage(f64),
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Fraction(fraction) => write!(f, "{}", fraction),
            Conversion::Percentage(value) => write!(f, "{}%", value),
        }
    }
}

/// Textual percentage or fraction recognised by the conversion parser
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatioInput {
    /// Percentage value with the `%` removed, e.g. `50.0` for "50%"
    Percent(f64),
    /// Integer fraction, e.g. `(1, 2)` for "1/2"
    Fraction(i64, i64),
}

/// A slot in a parsed template pattern
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// `{}` takes the next argument
    Argument,
    /// `{singular|plural}`
    Plural(String, String),
}

/// A template pattern split into literal segments and slots
///
/// `literals` always has exactly one more element than `slots`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePattern {
    /// Literal text around the slots
    pub literals: Vec<String>,
    /// Slots in order of appearance
    pub slots: Vec<Slot>,
}

impl TemplatePattern {
    /// Number of `{}` arguments the pattern consumes
    pub fn argument_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Argument))
            .count()
    }
}
