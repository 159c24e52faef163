//! # Timing Integration Tests
//!
//! The engine's cadence guarantees, verified on tokio's paused clock:
//!
//! 1. **Drift by design**: the next deadline is measured from tick
//!    completion, so the observed period is `interval + tick_duration`.
//! 2. **No re-entrancy**: a worker never runs two ticks concurrently, even
//!    when the tick takes longer than the interval.
//! 3. **Blocking stop**: `stop()` waits out an in-flight tick and no
//!    further tick starts afterwards.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use shard_scheduler::{
        RangeAssigner, SchedulerConfig, ShardId, ShardSchedulerApi, ShardedScheduler,
        ShutdownSignal, Ticker,
    };

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// Sleeps a fixed duration per tick and tracks per-worker call depth.
    struct SlowTicker {
        delay: Duration,
        calls: AtomicU64,
        /// shard set -> (current depth, max depth observed)
        depth: Mutex<HashMap<Vec<ShardId>, (u32, u32)>>,
    }

    impl SlowTicker {
        fn new(delay: Duration) -> Self {
            Self {
                delay,
                calls: AtomicU64::new(0),
                depth: Mutex::new(HashMap::new()),
            }
        }

        fn calls(&self) -> u64 {
            self.calls.load(Ordering::SeqCst)
        }

        fn max_depth(&self) -> u32 {
            self.depth
                .lock()
                .values()
                .map(|(_, max)| *max)
                .max()
                .unwrap_or(0)
        }
    }

    #[async_trait]
    impl Ticker for SlowTicker {
        async fn tick(
            &self,
            _shutdown: ShutdownSignal,
            shards: &[ShardId],
        ) -> anyhow::Result<()> {
            let key = shards.to_vec();
            {
                let mut depth = self.depth.lock();
                let entry = depth.entry(key.clone()).or_insert((0, 0));
                entry.0 += 1;
                entry.1 = entry.1.max(entry.0);
            }

            tokio::time::sleep(self.delay).await;

            self.depth.lock().get_mut(&key).expect("entry exists").0 -= 1;
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn scheduler(
        workers_count: usize,
        interval: Duration,
        ticker: Arc<SlowTicker>,
    ) -> ShardedScheduler {
        let config = SchedulerConfig {
            workers_count,
            shards_count: workers_count as u32,
            interval,
        };
        ShardedScheduler::new(config, ticker, Arc::new(RangeAssigner))
    }

    // =========================================================================
    // TESTS
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_period_is_interval_plus_tick_duration() {
        // interval 50ms + tick 30ms: completions land at 80, 160, 240, 320,
        // 400ms. A fixed-cadence timer would have completed 8 ticks by
        // t = 410ms; drift-by-design completes exactly 5.
        let ticker = Arc::new(SlowTicker::new(Duration::from_millis(30)));
        let engine = scheduler(1, Duration::from_millis(50), Arc::clone(&ticker));

        engine.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(410)).await;
        let completed = ticker.calls();
        engine.stop().await.unwrap();

        assert_eq!(completed, 5, "expected N x (interval + tick) cadence");
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_reentrant_ticks_when_tick_outlasts_interval() {
        // Tick (25ms) longer than interval (10ms): a cadence-preserving
        // timer would overlap; this engine must not.
        let ticker = Arc::new(SlowTicker::new(Duration::from_millis(25)));
        let engine = scheduler(4, Duration::from_millis(10), Arc::clone(&ticker));

        engine.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;
        engine.stop().await.unwrap();

        assert!(ticker.calls() >= 8, "calls={}", ticker.calls());
        assert_eq!(ticker.max_depth(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_blocks_until_inflight_tick_completes() {
        // Tick starts at t = 10ms and runs 500ms. Stop is called at
        // t = 15ms and must not return before t = 510ms, and no further
        // tick may start afterwards.
        let ticker = Arc::new(SlowTicker::new(Duration::from_millis(500)));
        let engine = scheduler(1, Duration::from_millis(10), Arc::clone(&ticker));

        engine.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(15)).await;

        let before = tokio::time::Instant::now();
        engine.stop().await.unwrap();
        let blocked = before.elapsed();

        assert!(
            blocked >= Duration::from_millis(490),
            "stop returned after {blocked:?}, before the in-flight tick finished"
        );
        assert_eq!(ticker.calls(), 1);

        // Nothing restarts after stop.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(ticker.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_interval_guarantees_first_tick() {
        let ticker = Arc::new(SlowTicker::new(Duration::ZERO));
        let engine = scheduler(3, Duration::from_millis(40), Arc::clone(&ticker));

        engine.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(41)).await;
        let calls = ticker.calls();
        engine.stop().await.unwrap();

        assert!(calls >= 3, "every worker ticks within one interval");
    }
}
