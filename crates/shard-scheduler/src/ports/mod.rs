//! # Ports
//!
//! Hexagonal architecture boundary:
//! - **Inbound**: the scheduler API driven by the host process.
//! - **Outbound**: the capabilities the scheduler drives (tick callback,
//!   shard assignment).

pub mod inbound;
pub mod outbound;

pub use inbound::ShardSchedulerApi;
pub use outbound::{MockTicker, ShardAssigner, Ticker};
