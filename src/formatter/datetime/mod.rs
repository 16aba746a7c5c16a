//! DateTime humanizing module
//!
//! This module turns durations, relative instants and calendar dates into
//! English phrases.

mod calendar;
mod clock;
mod duration;

// Re-export the public interface
pub use calendar::humanize_date;
pub use clock::{Clock, FixedClock, SystemClock};
pub use duration::{humanize_duration, time_ago, time_until};
