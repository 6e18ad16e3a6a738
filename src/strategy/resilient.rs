//! Resilient strategy: concurrent first, sequential once as fallback.
//!
//! The fallback is a complete, independent re-run against the downstream services, not a
//! resumption. Operations that already succeeded during the concurrent attempt (a payment, an
//! order record) run again, which is only safe while those operations can be repeated for the
//! same order.

use super::{concurrent, sequential};
use crate::error::FulfillmentError;
use crate::model::{CreatedOrder, Order};
use crate::services::FulfillmentServices;
use tracing::{info, instrument, warn};

#[instrument(skip_all, fields(customer_id = order.customer_id))]
pub async fn execute(
    services: &dyn FulfillmentServices,
    order: &Order,
) -> Result<CreatedOrder, FulfillmentError> {
    info!("Starting resilient processing");

    match concurrent::execute(services, order).await {
        Ok(created) => Ok(created),
        Err(e) => {
            warn!(error_kind = %e.kind(), error = %e, "Concurrent processing failed, falling back to sequential");
            sequential::execute(services, order).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::LineItem;
    use crate::services::mock::MockServices;
    use crate::services::Operation;

    fn valid_order() -> Order {
        Order::new(
            1,
            vec![LineItem::new("Product A", 5), LineItem::new("Product B", 3)],
            150.0,
        )
    }

    #[tokio::test]
    async fn test_success_needs_no_fallback() {
        let services = MockServices::new();
        let created = execute(&services, &valid_order()).await.unwrap();

        assert_eq!(created.total, 150.0);
        assert_eq!(services.call_count(Operation::ValidateCustomer), 1);
        // concurrent path notifies with the submitted order
        assert_eq!(services.notified_order_ids(), vec![None]);
    }

    #[tokio::test]
    async fn test_falls_back_once_and_recovers() {
        let services = MockServices::new();
        services.fail_times(
            Operation::ProcessPayment,
            FulfillmentError::InvalidAmount { amount: 150.0 },
            1,
        );

        let created = execute(&services, &valid_order()).await.unwrap();

        assert_eq!(created.total, 150.0);
        assert_eq!(services.call_count(Operation::ValidateCustomer), 2);
        assert_eq!(services.call_count(Operation::ProcessPayment), 2);
        // inventory ran in both attempts
        assert_eq!(services.call_count(Operation::CheckInventory), 2);
        // the sequential run notified with the created record
        assert_eq!(services.notified_order_ids(), vec![Some(created.id)]);
    }

    #[tokio::test]
    async fn test_never_attempts_a_third_time() {
        let services = MockServices::new();
        services.fail(
            Operation::CheckInventory,
            FulfillmentError::OutOfStock {
                items: vec!["Product A".to_string()],
            },
        );

        let err = execute(&services, &valid_order()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::OutOfStock);
        assert_eq!(services.call_count(Operation::ValidateCustomer), 2);
        assert_eq!(services.call_count(Operation::CheckInventory), 2);
    }

    #[tokio::test]
    async fn test_fallback_result_matches_sequential() {
        let orders = [
            Order::new(2, vec![LineItem::new("Product C", 0), LineItem::new("Product D", 2)], 200.0),
            Order::new(-1, vec![LineItem::new("Product E", 1)], 50.0),
            Order::new(3, vec![LineItem::new("Product F", 1)], 15_000.0),
        ];

        for order in &orders {
            let resilient = execute(&MockServices::new(), order).await;
            let direct = sequential::execute(&MockServices::new(), order).await;
            assert!(resilient.is_err());
            assert_eq!(resilient, direct);
        }
    }
}
