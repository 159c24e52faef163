//! Inbound port (driving side - API)

use crate::error::Result;
use async_trait::async_trait;

/// Primary port: scheduler lifecycle.
///
/// Single-shot contract: `start` at most once, then `stop` at most once.
/// Both are enforced by the implementation's lifecycle guard. There is no
/// pause/resume, no dynamic reconfiguration, and no status query.
#[async_trait]
pub trait ShardSchedulerApi: Send + Sync {
    /// Spawn all worker loops and return without waiting for any tick.
    async fn start(&self) -> Result<()>;

    /// Broadcast shutdown, then block until every worker loop has exited.
    ///
    /// Never times out: a tick callback that never returns stalls this
    /// call indefinitely. A worker in the middle of a tick is not
    /// interrupted; its callback only observes cancellation through the
    /// [`ShutdownSignal`](crate::domain::ShutdownSignal) it was given.
    async fn stop(&self) -> Result<()>;
}
