//! # Shard-Scheduler Test Suite
//!
//! Unified test crate covering the engine's observable guarantees:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── lifecycle.rs   # start/stop guard, worker accounting, shutdown
//!     ├── timing.rs      # drift-by-design cadence, re-entrancy, blocking stop
//!     └── assignment.rs  # default assigner partitions, end-to-end shard flow
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p shard-scheduler-tests
//!
//! # By category
//! cargo test -p shard-scheduler-tests integration::lifecycle::
//! cargo test -p shard-scheduler-tests integration::timing::
//! ```
//!
//! All timing-sensitive tests run under `#[tokio::test(start_paused = true)]`
//! so the clock is virtual and the assertions are deterministic.

#![allow(dead_code)]
