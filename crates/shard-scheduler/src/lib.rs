//! # Shard Scheduler
//!
//! Sharded periodic-execution engine.
//!
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Purpose
//!
//! Partition a fixed set of shard identifiers across a pool of workers and
//! repeatedly invoke a caller-supplied tick callback on each worker's shards
//! at a configured interval, until explicitly stopped:
//! - One independent loop per worker, ticks never overlap within a worker
//! - Cooperative, broadcast, one-shot shutdown; `stop()` blocks until every
//!   worker has exited
//! - The next deadline is measured from tick completion, so slow callbacks
//!   drift instead of piling up
//!
//! ## Module Structure
//!
//! ```text
//! shard-scheduler/
//! ├── domain           # Core types: WorkerContext, LifecycleState, ShutdownSignal
//! ├── algorithms/      # Default shard assignment strategies
//! ├── ports/           # API trait + capability traits (Ticker, ShardAssigner)
//! └── service          # ShardedScheduler: spawn, tick loops, shutdown
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::{RangeAssigner, StripedAssigner};
pub use config::SchedulerConfig;
pub use domain::{LifecycleState, ShardId, ShutdownSignal, WorkerContext, WorkerId};
pub use error::{Result, SchedulerError};
pub use ports::{MockTicker, ShardAssigner, ShardSchedulerApi, Ticker};
pub use service::ShardedScheduler;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
