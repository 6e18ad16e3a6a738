use crate::config::OrchestratorConfig;
use crate::model::{Order, Outcome, Statistics};
use crate::services::{FulfillmentServices, SimulatedServices};
use crate::stats_actor::{self, StatsClient, StatsError};
use crate::strategy::StrategyKind;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{info, instrument, warn};

/// The public entry point of the fulfillment workflow.
///
/// `Orchestrator` is responsible for:
/// - **Strategy Execution**: Running the selected [`StrategyKind`] against the downstream services
/// - **Timing**: Measuring the wall-clock duration of every run
/// - **Statistics**: Recording each processed order exactly once in the statistics actor
/// - **Lifecycle Management**: Starting and stopping the statistics actor
///
/// [`process`](Orchestrator::process) never fails: every downstream error becomes an
/// [`Outcome::Failure`]. It takes `&self`, so one orchestrator can serve many concurrent
/// callers (wrap it in an `Arc`); the statistics actor serializes their updates.
///
/// # Example
///
/// ```rust
/// use order_orchestrator::config::OrchestratorConfig;
/// use order_orchestrator::config::LatencyProfile;
/// use order_orchestrator::model::{LineItem, Order};
/// use order_orchestrator::runtime::Orchestrator;
/// use order_orchestrator::strategy::StrategyKind;
///
/// #[tokio::main]
/// async fn main() {
///     let config = OrchestratorConfig { latency: LatencyProfile::zero(), ..Default::default() };
///     let orchestrator = Orchestrator::simulated(&config);
///
///     let order = Order::new(1, vec![LineItem::new("Product A", 5)], 150.0);
///     let outcome = orchestrator.process(&order, StrategyKind::Resilient).await;
///     assert!(outcome.is_success());
///
///     let stats = orchestrator.statistics_snapshot().await.unwrap();
///     assert_eq!(stats.processed_count, 1);
///
///     orchestrator.shutdown().await.unwrap();
/// }
/// ```
pub struct Orchestrator {
    services: Arc<dyn FulfillmentServices>,

    /// Client for the statistics actor
    stats: StatsClient,

    /// Task handles of owned actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl Orchestrator {
    /// Creates an orchestrator with default settings and starts its statistics actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(services: Arc<dyn FulfillmentServices>) -> Self {
        Self::with_config(services, &OrchestratorConfig::default())
    }

    /// Creates an orchestrator using `config` for the statistics actor.
    pub fn with_config(services: Arc<dyn FulfillmentServices>, config: &OrchestratorConfig) -> Self {
        let (actor, stats) = stats_actor::new(config.stats_buffer);
        let handle = tokio::spawn(actor.run());

        Self {
            services,
            stats,
            handles: vec![handle],
        }
    }

    /// Creates an orchestrator backed by [`SimulatedServices`] using the configured latency.
    pub fn simulated(config: &OrchestratorConfig) -> Self {
        let services = Arc::new(SimulatedServices::new(config.latency.clone()));
        Self::with_config(services, config)
    }

    /// Wires an orchestrator to an externally managed statistics client.
    ///
    /// No actor is spawned; whoever owns the other end of `stats` answers its requests.
    pub fn from_parts(services: Arc<dyn FulfillmentServices>, stats: StatsClient) -> Self {
        Self {
            services,
            stats,
            handles: Vec::new(),
        }
    }

    /// Processes one order with the given strategy and records the result.
    #[instrument(skip(self, order), fields(strategy = %kind, customer_id = order.customer_id))]
    pub async fn process(&self, order: &Order, kind: StrategyKind) -> Outcome {
        let start = Instant::now();
        let result = kind.execute(self.services.as_ref(), order).await;
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        let outcome = Outcome::from_result(result, duration_ms, kind);
        match &outcome {
            Outcome::Success { order, .. } => {
                info!(order_id = %order.id, duration_ms, "Order processed")
            }
            Outcome::Failure {
                error_kind,
                error_message,
                ..
            } => warn!(%error_kind, error = %error_message, duration_ms, "Order failed"),
        }

        if let Err(e) = self.stats.record(outcome.is_success(), duration_ms).await {
            warn!(error = %e, "Could not record statistics");
        }

        outcome
    }

    /// Processes `orders` one after another, returning outcomes in input order.
    #[instrument(skip(self, orders), fields(strategy = %kind, orders = orders.len()))]
    pub async fn process_batch(&self, orders: &[Order], kind: StrategyKind) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(orders.len());
        for order in orders {
            outcomes.push(self.process(order, kind).await);
        }
        outcomes
    }

    /// Current statistics across every call to [`process`](Orchestrator::process).
    pub async fn statistics_snapshot(&self) -> Result<Statistics, StatsError> {
        self.stats.snapshot().await
    }

    /// Clears the statistics. This is the only way they are ever reset.
    pub async fn reset_statistics(&self) -> Result<(), StatsError> {
        self.stats.reset().await
    }

    /// Gracefully shuts down the orchestrator.
    ///
    /// Dropping the statistics client closes the actor's channel; the actor then drains its
    /// mailbox and exits. Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), StatsError> {
        info!("Shutting down orchestrator...");
        drop(self.stats);

        for handle in self.handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "Actor task failed");
                return Err(StatsError::TaskFailed(e.to_string()));
            }
        }

        info!("Orchestrator shutdown complete.");
        Ok(())
    }
}
