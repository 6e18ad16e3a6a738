//! # Simulated Downstream Services
//!
//! Stand-ins for the user, inventory, payment, order and email endpoints. Each call sleeps for
//! the delay configured in its [`LatencyProfile`] and then applies the rules in [`rules`].
//! A zero delay skips the sleep entirely.

use super::{rules, FulfillmentServices, Operation};
use crate::config::LatencyProfile;
use crate::error::FulfillmentError;
use crate::model::{
    CreatedOrder, Customer, InventoryResult, LineItem, NotificationReceipt, Order, OrderId,
    OrderRef, PaymentResult,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Downstream services backed by in-process rules and simulated latency.
#[derive(Debug, Default)]
pub struct SimulatedServices {
    latency: LatencyProfile,
    orders: rules::IdSequence,
    transactions: rules::IdSequence,
}

impl SimulatedServices {
    pub fn new(latency: LatencyProfile) -> Self {
        Self {
            latency,
            orders: rules::IdSequence::new(),
            transactions: rules::IdSequence::new(),
        }
    }

    /// Services that answer immediately.
    pub fn instant() -> Self {
        Self::new(LatencyProfile::zero())
    }

    pub fn latency(&self) -> &LatencyProfile {
        &self.latency
    }
}

pub(crate) async fn simulate_latency(op: Operation, delay: Duration) {
    if delay.is_zero() {
        return;
    }
    debug!(%op, delay_ms = delay.as_millis() as u64, "Simulating latency");
    tokio::time::sleep(delay).await;
}

#[async_trait]
impl FulfillmentServices for SimulatedServices {
    #[instrument(skip(self))]
    async fn validate_customer(&self, customer_id: i64) -> Result<Customer, FulfillmentError> {
        simulate_latency(Operation::ValidateCustomer, self.latency.validate_customer()).await;
        rules::validate_customer(customer_id)
    }

    #[instrument(skip(self, items), fields(items = items.len()))]
    async fn check_inventory(&self, items: &[LineItem]) -> Result<InventoryResult, FulfillmentError> {
        simulate_latency(Operation::CheckInventory, self.latency.check_inventory()).await;
        rules::check_inventory(items)
    }

    #[instrument(skip(self))]
    async fn process_payment(&self, amount: f64) -> Result<PaymentResult, FulfillmentError> {
        simulate_latency(Operation::ProcessPayment, self.latency.process_payment()).await;
        rules::process_payment(amount, self.transactions.next_id())
    }

    #[instrument(skip(self, order, customer), fields(customer_id = customer.id))]
    async fn create_order(
        &self,
        order: &Order,
        customer: &Customer,
    ) -> Result<CreatedOrder, FulfillmentError> {
        simulate_latency(Operation::CreateOrder, self.latency.create_order()).await;
        Ok(rules::create_order(
            OrderId(self.orders.next_id()),
            order,
            customer,
        ))
    }

    #[instrument(skip(self, order))]
    async fn send_notification(
        &self,
        address: &str,
        order: OrderRef<'_>,
    ) -> Result<NotificationReceipt, FulfillmentError> {
        simulate_latency(Operation::SendNotification, self.latency.send_notification()).await;
        rules::send_notification(address, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    #[tokio::test]
    async fn test_order_ids_increase() {
        let services = SimulatedServices::instant();
        let customer = services.validate_customer(1).await.unwrap();
        let order = Order::new(1, vec![LineItem::new("A", 1)], 10.0);

        let first = services.create_order(&order, &customer).await.unwrap();
        let second = services.create_order(&order, &customer).await.unwrap();

        assert_eq!(first.id, OrderId(1));
        assert_eq!(second.id, OrderId(2));
        assert_eq!(second.id.to_string(), "ord_2");
        assert_eq!(first.customer_id, 1);
        assert_eq!(first.total, 10.0);
    }

    #[test]
    fn test_instant_has_no_latency() {
        assert_eq!(SimulatedServices::instant().latency(), &LatencyProfile::zero());
        assert_eq!(
            SimulatedServices::default().latency(),
            &LatencyProfile::default()
        );
    }

    #[tokio::test]
    async fn test_transaction_ids_are_unique() {
        let services = SimulatedServices::instant();
        let a = services.process_payment(10.0).await.unwrap();
        let b = services.process_payment(10.0).await.unwrap();
        assert_ne!(a.transaction_id, b.transaction_id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let services = SimulatedServices::new(LatencyProfile::default());
        let start = Instant::now();
        services.process_payment(10.0).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(800));
    }
}
