//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`Orchestrator`] - Executes strategies, times them, and owns the statistics actor
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod orchestrator;
pub mod tracing;

pub use self::orchestrator::*;
pub use self::tracing::setup_tracing;
