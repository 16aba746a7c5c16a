//! Humanizing formatters
//!
//! This module holds the formatting functions themselves, one submodule per
//! concern. Every function is a pure transformation; only `time_ago` and
//! `time_until` consult an injected `Clock`.

mod datetime;
mod fraction;
mod ordinal;
mod plural;
mod text;
mod words;

pub use datetime::{Clock, FixedClock, SystemClock, humanize_date, humanize_duration, time_ago, time_until};
pub use fraction::{
    DEFAULT_MAX_DENOMINATOR, convert_percentage_fraction, find_closest_fraction,
    find_closest_fraction_within, simplify_fraction,
};
pub use ordinal::{date_ordinal_suffix, ordinal_suffix};
pub use plural::{Template, pluralize, pluralize_template};
pub use text::possessive;
pub use words::{NUMBER_CEILING, humanize_number};
