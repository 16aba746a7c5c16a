//! Error type shared by the fallible helpers

use thiserror::Error;

/// Errors produced by the humanize helpers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HumanizeError {
    /// The integer is at or above the number-to-words ceiling
    #[error("Integer too high: {value} is not below the supported ceiling")]
    NumberTooLarge {
        /// The rejected value
        value: u128,
    },

    /// Input is neither a percentage nor a fraction, or does not parse as one
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A template pattern could not be parsed
    #[error("Template syntax error: {0}")]
    TemplateSyntax(String),

    /// Literal segments and substitutions do not line up
    #[error("Template arity mismatch: expected {expected}, found {found}")]
    TemplateArity {
        /// Number of values the template needs
        expected: usize,
        /// Number of values supplied
        found: usize,
    },

    /// Vocabulary data is malformed
    #[error("Error parsing vocabulary data: {0}")]
    Vocabulary(String),
}

pub type Result<T> = std::result::Result<T, HumanizeError>;
