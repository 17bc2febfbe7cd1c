mod intervals;
mod machine;

pub use intervals::Intervals;
pub use machine::{IntervalClock, Phase};
