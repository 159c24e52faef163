//! # Shard Assignment Algorithms
//!
//! Deterministic default implementations of
//! [`ShardAssigner`](crate::ports::ShardAssigner). Both produce an exact
//! partition: every shard in `0..shards_count` lands on exactly one worker.
//! Callers with bespoke layouts supply their own assigner instead.

use crate::domain::{ShardId, WorkerId};
use crate::ports::ShardAssigner;

/// Modulo striping: shard `s` goes to worker `s % workers_count`.
///
/// Fast and uniform; adjacent shards land on different workers, which
/// spreads hot ranges at the cost of locality.
#[derive(Clone, Copy, Debug, Default)]
pub struct StripedAssigner;

impl ShardAssigner for StripedAssigner {
    fn assign(
        &self,
        worker_id: WorkerId,
        workers_count: usize,
        shards_count: u32,
    ) -> Vec<ShardId> {
        if workers_count == 0 {
            return Vec::new();
        }

        (0..shards_count)
            .filter(|shard| *shard as usize % workers_count == worker_id)
            .collect()
    }
}

/// Contiguous balanced slices: the first `shards_count % workers_count`
/// workers get one extra shard, everyone else gets the base share.
///
/// Preserves shard locality; workers with adjacent IDs own adjacent ranges.
#[derive(Clone, Copy, Debug, Default)]
pub struct RangeAssigner;

impl ShardAssigner for RangeAssigner {
    fn assign(
        &self,
        worker_id: WorkerId,
        workers_count: usize,
        shards_count: u32,
    ) -> Vec<ShardId> {
        if workers_count == 0 || worker_id >= workers_count {
            return Vec::new();
        }

        let workers = workers_count as u32;
        let worker = worker_id as u32;
        let base = shards_count / workers;
        let remainder = shards_count % workers;

        // Workers below the remainder own base+1 shards each.
        let extra = worker.min(remainder);
        let start = worker * base + extra;
        let len = if worker < remainder { base + 1 } else { base };

        (start..start + len).collect()
    }
}
