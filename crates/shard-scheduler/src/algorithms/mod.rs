//! # Algorithms
//!
//! Default shard assignment strategies.

pub mod assignment;

pub use assignment::{RangeAssigner, StripedAssigner};
