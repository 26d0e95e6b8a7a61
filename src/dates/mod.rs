pub mod range;

pub use range::{format, is_range_valid, normalize, parse, trip_days};
