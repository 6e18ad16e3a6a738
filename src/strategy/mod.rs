//! Execution strategies for the fulfillment workflow.
//!
//! Every strategy runs the same five downstream operations and differs only in how it orders
//! them:
//!
//! - [`sequential`]: one after another, each feeding the next.
//! - [`concurrent`]: customer validation first, then two concurrent pairs.
//! - [`resilient`]: `concurrent`, falling back to `sequential` once on failure.
//!
//! Strategies return the raw `Result`; turning it into an [`Outcome`](crate::model::Outcome) is
//! the orchestrator's job.

pub mod concurrent;
pub mod resilient;
pub mod sequential;

use crate::error::FulfillmentError;
use crate::model::{CreatedOrder, Order};
use crate::services::FulfillmentServices;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Selects the algorithm used by [`Orchestrator::process`](crate::runtime::Orchestrator::process).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Sequential,
    Concurrent,
    Resilient,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Sequential,
        StrategyKind::Concurrent,
        StrategyKind::Resilient,
    ];

    /// Runs this strategy against `services`.
    pub async fn execute(
        self,
        services: &dyn FulfillmentServices,
        order: &Order,
    ) -> Result<CreatedOrder, FulfillmentError> {
        match self {
            StrategyKind::Sequential => sequential::execute(services, order).await,
            StrategyKind::Concurrent => concurrent::execute(services, order).await,
            StrategyKind::Resilient => resilient::execute(services, order).await,
        }
    }
}

/// Failure used when an inventory check answers without error but reports the items unavailable.
pub(crate) fn unavailable(order: &Order) -> FulfillmentError {
    FulfillmentError::OutOfStock {
        items: order.items.iter().map(|item| item.name.clone()).collect(),
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrategyKind::Sequential => "sequential",
            StrategyKind::Concurrent => "concurrent",
            StrategyKind::Resilient => "resilient",
        };
        f.write_str(name)
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(StrategyKind::Sequential),
            "concurrent" => Ok(StrategyKind::Concurrent),
            "resilient" => Ok(StrategyKind::Resilient),
            other => Err(format!("Unknown strategy: {}", other)),
        }
    }
}
