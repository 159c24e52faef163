//! # Domain Types
//!
//! Immutable value types shared by the scheduler core.

use tokio::sync::watch;

/// Integer identifier for a partition of externally-managed work.
pub type ShardId = u32;

/// Worker index in `[0, workers_count)`.
pub type WorkerId = usize;

/// Per-worker immutable context: the worker's index and its shard set,
/// computed exactly once at start and never recomputed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkerContext {
    /// Worker index.
    pub worker_id: WorkerId,
    /// Shards owned by this worker, in assignment order. May be empty;
    /// a worker without shards still ticks with an empty set.
    pub shards: Vec<ShardId>,
}

impl WorkerContext {
    /// Create a new worker context.
    pub fn new(worker_id: WorkerId, shards: Vec<ShardId>) -> Self {
        Self { worker_id, shards }
    }
}

/// Scheduler lifecycle state machine.
///
/// The engine is single-shot: `Idle → Running → Stopped`, no restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Constructed, no workers spawned yet.
    #[default]
    Idle,
    /// Workers spawned and ticking.
    Running,
    /// Shutdown broadcast sent and all workers joined.
    Stopped,
}

impl LifecycleState {
    /// Check if transition to next state is valid.
    pub fn can_transition_to(&self, next: LifecycleState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running) | (Self::Running, Self::Stopped)
        )
    }

    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped)
    }
}

/// Handle on the scheduler's broadcast shutdown channel.
///
/// One-shot and irreversible: once triggered it stays triggered. Each worker
/// loop waits on its own clone, and every tick callback receives a clone so
/// it can bail out mid-flight if it wants to be stoppable. The engine never
/// force-terminates a running callback.
#[derive(Clone, Debug)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    pub(crate) fn new(rx: watch::Receiver<bool>) -> Self {
        Self { rx }
    }

    /// Whether shutdown has been triggered.
    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until shutdown is triggered. Returns immediately if it already
    /// was. A dropped sender counts as shutdown.
    pub async fn cancelled(&mut self) {
        if *self.rx.borrow_and_update() {
            return;
        }
        let _ = self.rx.changed().await;
    }
}
