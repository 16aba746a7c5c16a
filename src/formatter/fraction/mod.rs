mod convert;
mod utils;

pub use convert::{
    DEFAULT_MAX_DENOMINATOR, convert_percentage_fraction, find_closest_fraction,
    find_closest_fraction_within, simplify_fraction,
};
pub(crate) use utils::round_half_up;
