//! # Order Orchestrator Demo
//!
//! Processes the three demonstration orders with the resilient strategy and reports the final
//! statistics:
//!
//! 1. A valid order that succeeds.
//! 2. An order with an out-of-stock item.
//! 3. An order from an unknown customer.
//!
//! Latency and mailbox size come from [`OrchestratorConfig::from_env`].

use order_orchestrator::config::OrchestratorConfig;
use order_orchestrator::model::{LineItem, Order, Outcome};
use order_orchestrator::runtime::{setup_tracing, Orchestrator};
use order_orchestrator::strategy::StrategyKind;
use tracing::{error, info, Instrument};

fn demo_orders() -> Vec<Order> {
    vec![
        Order::new(
            1,
            vec![LineItem::new("Product A", 5), LineItem::new("Product B", 3)],
            150.0,
        ),
        Order::new(
            2,
            vec![LineItem::new("Product C", 0), LineItem::new("Product D", 2)],
            200.0,
        ),
        Order::new(-1, vec![LineItem::new("Product E", 1)], 50.0),
    ]
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = OrchestratorConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting order orchestrator demo");

    let orchestrator = Orchestrator::simulated(&config);
    let orders = demo_orders();

    for (i, order) in orders.iter().enumerate() {
        let span = tracing::info_span!("order", n = i + 1, of = orders.len());
        let outcome = orchestrator
            .process(order, StrategyKind::Resilient)
            .instrument(span)
            .await;

        match outcome {
            Outcome::Success {
                order, duration_ms, ..
            } => info!(order_id = %order.id, duration_ms = duration_ms.round(), "Order completed"),
            Outcome::Failure {
                error_message,
                error_kind,
                ..
            } => error!(%error_kind, error = %error_message, "Order failed"),
        }
    }

    let stats = orchestrator
        .statistics_snapshot()
        .await
        .map_err(|e| e.to_string())?;
    info!(
        processed = stats.processed_count,
        succeeded = stats.success_count,
        failed = stats.failure_count,
        average_ms = stats.rounded_average_ms(),
        success_rate = %format!("{:.1}%", stats.success_rate() * 100.0),
        "Final statistics"
    );

    orchestrator.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
