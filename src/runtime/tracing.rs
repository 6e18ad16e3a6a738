//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for binaries
//! embedding the orchestrator.
//!
//! ## Configuration
//!
//! Log levels come from `RUST_LOG`. The compact format hides module paths
//! (`with_target(false)`) and shows the span hierarchy inline instead.
//!
//! ```bash
//! # Strategy starts and order outcomes
//! RUST_LOG=info cargo run
//!
//! # Every workflow step, simulated delays and statistics updates
//! RUST_LOG=debug cargo run
//!
//! # Only the strategies
//! RUST_LOG=order_orchestrator::strategy=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Orchestrator**: one `process` span per order with `strategy` and `customer_id`
//! - **Strategies**: start of each strategy, each completed step (debug), fallbacks (warn)
//! - **Downstream calls**: one span per simulated operation, with its simulated delay
//! - **Statistics actor**: startup, every record (debug), reset and final totals on shutdown
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**, a resilient run that falls back:
//!
//! ```text
//! INFO process: Starting resilient processing strategy=resilient customer_id=2
//! INFO process:execute:execute: Starting concurrent processing
//! WARN process:execute: Concurrent processing failed, falling back to sequential error_kind=out_of_stock
//! INFO process:execute:execute: Starting sequential processing
//! WARN process: Order failed error_kind=out_of_stock error=Items out of stock: Product C
//! ```

/// Installs the global compact subscriber. Later calls are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - spans carry the context
        .compact() // Compact format shows spans inline (e.g., "process:execute")
        .try_init();
}
