//! Error types for the statistics actor.

use thiserror::Error;

/// Errors raised while talking to the statistics actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StatsError {
    /// The actor is gone; the request could not be delivered.
    #[error("Statistics actor closed")]
    ActorClosed,

    /// The actor dropped the response channel before answering.
    #[error("Statistics actor dropped response channel")]
    ActorDropped,

    /// The actor task panicked or was cancelled.
    #[error("Statistics actor task failed: {0}")]
    TaskFailed(String),
}
