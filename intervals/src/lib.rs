pub mod data;
pub mod interval;
mod render;
pub mod set;

pub use data::{load, parse_interval, read_intervals};
pub use interval::Interval;
pub use set::{Intervals, Summary};
