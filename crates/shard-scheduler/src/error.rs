//! Error types for the scheduler

use thiserror::Error;

/// Result type alias for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors that can occur when driving the scheduler lifecycle.
///
/// Tick failures never appear here: errors returned by the tick callback
/// are absorbed at the worker-loop boundary (logged, loop continues).
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// `start` called on a scheduler that is running or already stopped.
    /// The engine is single-shot; there is no restart.
    #[error("scheduler already started")]
    AlreadyStarted,

    /// `stop` called on a scheduler that was never started or is already
    /// stopped.
    #[error("scheduler is not running")]
    NotRunning,
}
