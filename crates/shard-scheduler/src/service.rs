//! Concrete Sharded Scheduler Implementation
//!
//! One spawned loop per worker, a broadcast one-shot shutdown channel, and
//! a blocking join on stop. The per-worker loop is the whole state machine:
//! wait for timer-or-shutdown, tick, re-arm from the moment of completion.

use crate::{
    config::SchedulerConfig,
    domain::{LifecycleState, ShutdownSignal, WorkerContext},
    error::{Result, SchedulerError},
    ports::{ShardAssigner, ShardSchedulerApi, Ticker},
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Sharded periodic-execution engine.
///
/// Partitions `shards_count` shard IDs across `workers_count` independent
/// loops via the supplied [`ShardAssigner`] and invokes the [`Ticker`] on
/// each worker's shard set every `interval`, measured from the previous
/// tick's completion. Single-shot lifecycle: `start` once, `stop` once.
pub struct ShardedScheduler {
    /// Immutable run configuration.
    config: SchedulerConfig,

    /// The unit of work invoked on every tick.
    ticker: Arc<dyn Ticker>,

    /// Shard assignment, consulted exactly once per worker at start.
    assigner: Arc<dyn ShardAssigner>,

    /// Broadcast shutdown trigger (write-once).
    shutdown_tx: watch::Sender<bool>,

    /// Template receiver cloned into every worker.
    shutdown_rx: watch::Receiver<bool>,

    /// Lifecycle guard: Idle -> Running -> Stopped, no restart.
    state: Mutex<LifecycleState>,

    /// Join handles for all spawned workers.
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl ShardedScheduler {
    /// Create a new scheduler. The shutdown channel is armed but not
    /// triggered; no work happens until [`ShardSchedulerApi::start`].
    pub fn new(
        config: SchedulerConfig,
        ticker: Arc<dyn Ticker>,
        assigner: Arc<dyn ShardAssigner>,
    ) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            config,
            ticker,
            assigner,
            shutdown_tx,
            shutdown_rx,
            state: Mutex::new(LifecycleState::Idle),
            workers: Mutex::new(Vec::new()),
        }
    }
}

/// One worker's tick/cancellation loop.
///
/// Blocks at exactly one point per iteration: timer-or-shutdown. Shutdown
/// observed while waiting exits immediately, with no final tick. A fresh
/// sleep is armed only after the tick returns, so the next deadline is
/// measured from tick completion — slow callbacks drift the cadence but two
/// ticks of one worker can never overlap.
async fn worker_loop(
    ctx: WorkerContext,
    ticker: Arc<dyn Ticker>,
    mut shutdown: ShutdownSignal,
    interval: Duration,
) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                // Armed timer is simply dropped; no drain needed.
                return;
            }
            _ = tokio::time::sleep(interval) => {
                if let Err(err) = ticker.tick(shutdown.clone(), &ctx.shards).await {
                    // Non-fatal: log and keep ticking.
                    error!(worker = ctx.worker_id, err = %err, "tick");
                }
            }
        }
    }
}

#[async_trait]
impl ShardSchedulerApi for ShardedScheduler {
    async fn start(&self) -> Result<()> {
        {
            let mut state = self.state.lock();
            if !state.can_transition_to(LifecycleState::Running) {
                return Err(SchedulerError::AlreadyStarted);
            }
            *state = LifecycleState::Running;
        }

        let mut workers = self.workers.lock();
        for worker_id in 0..self.config.workers_count {
            // Computed once per worker, never recomputed during the run.
            let shards = self.assigner.assign(
                worker_id,
                self.config.workers_count,
                self.config.shards_count,
            );
            let ctx = WorkerContext::new(worker_id, shards);
            let ticker = Arc::clone(&self.ticker);
            let shutdown = ShutdownSignal::new(self.shutdown_rx.clone());
            let interval = self.config.interval;

            workers.push(tokio::spawn(worker_loop(ctx, ticker, shutdown, interval)));
        }
        drop(workers);

        debug!("started");
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        {
            let mut state = self.state.lock();
            if !state.can_transition_to(LifecycleState::Stopped) {
                return Err(SchedulerError::NotRunning);
            }
            *state = LifecycleState::Stopped;
        }

        // One-shot broadcast; every receiver stays triggered from here on.
        let _ = self.shutdown_tx.send(true);

        // Take the handles out before awaiting: the lock must not be held
        // across an await point.
        let workers: Vec<JoinHandle<()>> = std::mem::take(&mut *self.workers.lock());
        for worker in workers {
            if let Err(err) = worker.await {
                error!(err = %err, "worker task failed");
            }
        }

        debug!("stopped");
        Ok(())
    }
}
