pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

// Main API exports
pub use error::HumanizeError;
pub use formatter::*;
pub use locale::Vocabulary;
pub use parser::{parse_ratio, parse_template};
pub use types::*;
