#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Order Orchestrator
//!
//! > **One order workflow, three ways to run it.**
//!
//! This crate drives a fixed order-fulfillment workflow (validate customer, check inventory,
//! take payment, create the order record, send the confirmation) through interchangeable
//! execution strategies, and keeps running statistics across every processed order.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Strategies, not Flags
//!
//! The same five downstream calls can be ordered in different ways:
//! - **Sequential**: strict order, each step feeding the next.
//! - **Concurrent**: validate first, then payment ‖ inventory, then creation ‖ notification.
//! - **Resilient**: concurrent first, and exactly one sequential fallback when it fails.
//!
//! Each strategy is a plain async function over the [`FulfillmentServices`](services::FulfillmentServices)
//! trait and returns a `Result`. The [`Orchestrator`](runtime::Orchestrator) is the only place
//! where a result becomes an [`Outcome`](model::Outcome), so no error ever leaks to callers.
//!
//! ### Statistics as an Actor
//!
//! The counters and the running average are owned by a single Tokio task
//! ([`StatsActor`](stats_actor::StatsActor)). Concurrent callers send it messages through a
//! cloneable [`StatsClient`](stats_actor::StatsClient); since the actor handles one message at
//! a time, `processed == succeeded + failed` holds under any load, with no locks.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Typed Errors
//! Downstream failures are a [`FulfillmentError`](error::FulfillmentError) enum. Recovery and
//! reporting match on its [`ErrorKind`](error::ErrorKind), never on message text.
//!
//! ### 2. Swappable Downstream Services
//! [`SimulatedServices`](services::SimulatedServices) applies the business rules behind a
//! configurable delay. Tests use [`MockServices`](services::mock::MockServices), which adds
//! failure injection and a call journal.
//!
//! ### 3. Observability
//! Everything logs through `tracing` with structured fields. See [`runtime::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: pure data (orders, results, [`Outcome`](model::Outcome), [`Statistics`](model::Statistics)).
//! - [`services`]: the downstream boundary, its simulation and its mock.
//! - [`strategy`]: the three execution strategies.
//! - [`stats_actor`]: the statistics actor, its client and mock helpers.
//! - [`runtime`]: the [`Orchestrator`](runtime::Orchestrator) and tracing setup.
//! - [`config`]: latency profiles and environment configuration.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demonstration orders with info logs
//! RUST_LOG=info cargo run
//!
//! # Same, without simulated delays
//! FULFILLMENT_LATENCY_SCALE=0 RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod runtime;
pub mod services;
pub mod stats_actor;
pub mod strategy;
