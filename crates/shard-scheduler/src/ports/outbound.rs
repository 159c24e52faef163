//! Outbound ports (driven side - capabilities supplied by the host)

use crate::domain::{ShardId, ShutdownSignal, WorkerId};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// The unit of recurring work: one invocation per tick against a worker's
/// fixed shard set.
///
/// Errors are absorbed at the worker-loop boundary: the loop logs them and
/// keeps ticking. A callback that wants to be stoppable mid-tick must honor
/// the supplied [`ShutdownSignal`]; the engine enforces no timeout.
#[async_trait]
pub trait Ticker: Send + Sync {
    /// Run one tick against `shards`.
    async fn tick(&self, shutdown: ShutdownSignal, shards: &[ShardId]) -> anyhow::Result<()>;
}

/// Deterministic shard assignment.
///
/// Called exactly once per worker at start time, never re-invoked during
/// the run. May return an empty set (the worker then ticks with no shards).
/// Partition correctness (no gaps, no overlaps across workers) is entirely
/// the implementor's responsibility; the engine neither prevents nor
/// detects overlapping assignments.
pub trait ShardAssigner: Send + Sync {
    /// Compute the shard set for `worker_id` out of `workers_count` workers
    /// over `shards_count` shards.
    fn assign(&self, worker_id: WorkerId, workers_count: usize, shards_count: u32)
        -> Vec<ShardId>;
}

/// Mock ticker for tests: counts invocations, optionally fails every tick,
/// optionally sleeps to simulate slow work.
#[derive(Default)]
pub struct MockTicker {
    calls: AtomicU64,
    fail: bool,
    delay: Option<Duration>,
    seen_shards: Mutex<Vec<Vec<ShardId>>>,
}

impl MockTicker {
    /// Ticker that succeeds immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticker that fails every tick.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Ticker that sleeps `delay` on every tick before returning.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Total ticks observed across all workers.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Shard sets seen, in invocation order.
    pub fn seen_shards(&self) -> Vec<Vec<ShardId>> {
        self.seen_shards.lock().clone()
    }
}

#[async_trait]
impl Ticker for MockTicker {
    async fn tick(&self, _shutdown: ShutdownSignal, shards: &[ShardId]) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_shards.lock().push(shards.to_vec());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            anyhow::bail!("mock tick failure");
        }
        Ok(())
    }
}
