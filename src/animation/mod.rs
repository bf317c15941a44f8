//! Time-driven animation of the visible population.

pub mod pulse;

pub use pulse::{instance_count, PointPulse};
