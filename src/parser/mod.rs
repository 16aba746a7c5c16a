//! Input parsing module
//!
//! This module parses the textual inputs accepted by the helpers: pluralization
//! template patterns and percentage/fraction strings.
//! The main entry points are `parse_template` and `parse_ratio`.

mod ratio;
mod template;

pub use ratio::parse_ratio;
pub use template::parse_template;
