//! Configuration types for the scheduler

use serde::Deserialize;
use std::time::Duration;

/// Runtime configuration for the sharded scheduler.
///
/// Immutable after construction; there is no re-configuration API.
///
/// The engine performs no validation here: `workers_count == 0` spawns
/// nothing (the scheduler is still stoppable), and a zero `interval`
/// produces a hot loop. Both are the caller's responsibility.
#[derive(Clone, Debug, Deserialize)]
pub struct SchedulerConfig {
    /// Number of worker loops to spawn.
    pub workers_count: usize,

    /// Total number of shards to partition across workers. Its meaning is
    /// defined by the [`ShardAssigner`](crate::ports::ShardAssigner) in use.
    pub shards_count: u32,

    /// Delay between a tick's completion and the next tick's start for a
    /// given worker. The observed period is `interval + tick_duration`.
    pub interval: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            workers_count: 1,
            shards_count: 0,
            interval: Duration::from_secs(1),
        }
    }
}
