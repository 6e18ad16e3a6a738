use crate::error::{ErrorKind, FulfillmentError};
use crate::model::CreatedOrder;
use crate::strategy::StrategyKind;
use serde::{Deserialize, Serialize};

/// The only value [`Orchestrator::process`](crate::runtime::Orchestrator::process) hands back.
///
/// Callers branch on the variant; a failure never escapes the orchestrator any other way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success {
        order: CreatedOrder,
        duration_ms: f64,
        strategy: StrategyKind,
    },
    Failure {
        error_kind: ErrorKind,
        error_message: String,
        duration_ms: f64,
        strategy: StrategyKind,
    },
}

impl Outcome {
    /// Builds the outcome of one strategy run.
    pub fn from_result(
        result: Result<CreatedOrder, FulfillmentError>,
        duration_ms: f64,
        strategy: StrategyKind,
    ) -> Self {
        match result {
            Ok(order) => Outcome::Success {
                order,
                duration_ms,
                strategy,
            },
            Err(e) => Outcome::Failure {
                error_kind: e.kind(),
                error_message: e.to_string(),
                duration_ms,
                strategy,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn duration_ms(&self) -> f64 {
        match self {
            Outcome::Success { duration_ms, .. } | Outcome::Failure { duration_ms, .. } => {
                *duration_ms
            }
        }
    }

    pub fn strategy(&self) -> StrategyKind {
        match self {
            Outcome::Success { strategy, .. } | Outcome::Failure { strategy, .. } => *strategy,
        }
    }

    pub fn order(&self) -> Option<&CreatedOrder> {
        match self {
            Outcome::Success { order, .. } => Some(order),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error_kind, .. } => Some(*error_kind),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error_message, .. } => Some(error_message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_keeps_kind_and_message() {
        let err = FulfillmentError::InvalidAmount { amount: 15000.0 };
        let outcome = Outcome::from_result(Err(err), 12.5, StrategyKind::Sequential);

        assert!(!outcome.is_success());
        assert_eq!(outcome.error_kind(), Some(ErrorKind::InvalidAmount));
        assert_eq!(outcome.error_message(), Some("Invalid payment amount: 15000"));
        assert_eq!(outcome.duration_ms(), 12.5);
        assert_eq!(outcome.strategy(), StrategyKind::Sequential);
        assert!(outcome.order().is_none());
    }

    #[test]
    fn test_serialized_shape_is_tagged() {
        let outcome = Outcome::from_result(
            Err(FulfillmentError::CustomerNotFound { customer_id: -1 }),
            3.0,
            StrategyKind::Resilient,
        );

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["error_kind"], "customer_not_found");
        assert_eq!(json["strategy"], "resilient");
        assert_eq!(json["duration_ms"], 3.0);
    }
}
