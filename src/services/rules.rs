//! Business rules of the downstream operations, free of any latency or I/O.
//!
//! Both [`SimulatedServices`](super::SimulatedServices) and [`MockServices`](super::mock::MockServices)
//! delegate here, so test doubles behave like the simulation unless told otherwise.

use crate::error::FulfillmentError;
use crate::model::{
    CreatedOrder, Customer, InventoryResult, LineItem, NotificationReceipt, Order, OrderId,
    OrderRef, PaymentResult,
};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Payments must stay strictly below this amount.
pub const MAX_PAYMENT_AMOUNT: f64 = 10_000.0;

/// Monotonic id source, one per kind of generated identifier.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_customer(customer_id: i64) -> Result<Customer, FulfillmentError> {
    if customer_id <= 0 {
        return Err(FulfillmentError::CustomerNotFound { customer_id });
    }
    Ok(Customer::new(
        customer_id,
        format!("Customer {}", customer_id),
        format!("user{}@example.com", customer_id),
    ))
}

pub fn check_inventory(items: &[LineItem]) -> Result<InventoryResult, FulfillmentError> {
    let missing: Vec<String> = items
        .iter()
        .filter(|item| !item.in_stock())
        .map(|item| item.name.clone())
        .collect();

    if !missing.is_empty() {
        return Err(FulfillmentError::OutOfStock { items: missing });
    }
    Ok(InventoryResult {
        available: true,
        items: items.to_vec(),
    })
}

pub fn process_payment(amount: f64, transaction: u64) -> Result<PaymentResult, FulfillmentError> {
    // NaN fails both comparisons and is rejected too.
    if !(amount > 0.0 && amount < MAX_PAYMENT_AMOUNT) {
        return Err(FulfillmentError::InvalidAmount { amount });
    }
    Ok(PaymentResult {
        approved: true,
        transaction_id: format!("txn_{}", transaction),
        amount,
    })
}

pub fn create_order(id: OrderId, order: &Order, customer: &Customer) -> CreatedOrder {
    CreatedOrder {
        id,
        customer_id: customer.id,
        items: order.items.clone(),
        total: order.total,
        created_at: Utc::now(),
    }
}

pub fn send_notification(
    address: &str,
    order: OrderRef<'_>,
) -> Result<NotificationReceipt, FulfillmentError> {
    if !address.contains('@') {
        return Err(FulfillmentError::InvalidAddress {
            address: address.to_string(),
        });
    }
    Ok(NotificationReceipt {
        sent: true,
        recipient: address.to_string(),
        order_id: order.order_id().cloned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_ids_must_be_positive() {
        let customer = validate_customer(7).unwrap();
        assert_eq!(customer.email, "user7@example.com");
        assert_eq!(customer.name, "Customer 7");

        assert_eq!(
            validate_customer(0),
            Err(FulfillmentError::CustomerNotFound { customer_id: 0 })
        );
        assert!(validate_customer(-1).is_err());
    }

    #[test]
    fn test_inventory_reports_every_missing_item() {
        let items = vec![
            LineItem::new("A", 0),
            LineItem::new("B", 2),
            LineItem::new("C", -4),
        ];
        assert_eq!(
            check_inventory(&items),
            Err(FulfillmentError::OutOfStock {
                items: vec!["A".to_string(), "C".to_string()]
            })
        );

        let result = check_inventory(&items[1..2]).unwrap();
        assert!(result.available);
        assert_eq!(result.items.len(), 1);
    }

    #[test]
    fn test_payment_bounds() {
        assert!(process_payment(0.0, 1).is_err());
        assert!(process_payment(-5.0, 1).is_err());
        assert!(process_payment(10_000.0, 1).is_err());
        assert!(process_payment(f64::NAN, 1).is_err());

        let payment = process_payment(9_999.99, 42).unwrap();
        assert!(payment.approved);
        assert_eq!(payment.transaction_id, "txn_42");
        assert_eq!(payment.amount, 9_999.99);
    }

    #[test]
    fn test_notification_requires_at_sign() {
        let order = Order::new(1, vec![], 10.0);
        let err = send_notification("nobody.example.com", OrderRef::Submitted(&order));
        assert_eq!(
            err,
            Err(FulfillmentError::InvalidAddress {
                address: "nobody.example.com".to_string()
            })
        );

        let customer = Customer::new(1, "Customer 1", "user1@example.com");
        let created = create_order(OrderId(9), &order, &customer);
        let receipt = send_notification(&customer.email, OrderRef::Created(&created)).unwrap();
        assert!(receipt.sent);
        assert_eq!(receipt.order_id, Some(OrderId(9)));
    }

    #[test]
    fn test_id_sequence_is_monotonic() {
        let seq = IdSequence::new();
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
    }
}
