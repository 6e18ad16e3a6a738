//! The downstream service boundary consumed by the strategies.
//!
//! [`FulfillmentServices`] is the capability set the workflow needs. Two implementations ship
//! with the crate:
//!
//! - [`SimulatedServices`] applies the business rules behind a configurable delay.
//! - [`mock::MockServices`] adds failure injection and a call journal for tests.

pub mod mock;
pub mod rules;
pub mod simulated;

pub use simulated::*;

use crate::error::FulfillmentError;
use crate::model::{
    CreatedOrder, Customer, InventoryResult, LineItem, NotificationReceipt, Order, OrderRef,
    PaymentResult,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The five workflow-step operations.
///
/// Every call is made exactly once per step per strategy attempt; implementations must not
/// retry on their own. No timeout is applied by callers, so an implementation that never
/// answers stalls the order that is waiting on it.
#[async_trait]
pub trait FulfillmentServices: Send + Sync {
    /// Resolves a customer. Fails with `CustomerNotFound` when the id is not positive.
    async fn validate_customer(&self, customer_id: i64) -> Result<Customer, FulfillmentError>;

    /// Checks stock for every item. Fails with `OutOfStock` when any item has none left.
    async fn check_inventory(&self, items: &[LineItem]) -> Result<InventoryResult, FulfillmentError>;

    /// Charges `amount`. Fails with `InvalidAmount` outside `(0, 10000)`.
    async fn process_payment(&self, amount: f64) -> Result<PaymentResult, FulfillmentError>;

    /// Creates the order record. Never fails.
    async fn create_order(
        &self,
        order: &Order,
        customer: &Customer,
    ) -> Result<CreatedOrder, FulfillmentError>;

    /// Sends the confirmation. Fails with `InvalidAddress` when `address` has no `@`.
    async fn send_notification(
        &self,
        address: &str,
        order: OrderRef<'_>,
    ) -> Result<NotificationReceipt, FulfillmentError>;
}

/// Names the downstream operations, for logs and test journals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ValidateCustomer,
    CheckInventory,
    ProcessPayment,
    CreateOrder,
    SendNotification,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::ValidateCustomer,
        Operation::CheckInventory,
        Operation::ProcessPayment,
        Operation::CreateOrder,
        Operation::SendNotification,
    ];
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::ValidateCustomer => "validate_customer",
            Operation::CheckInventory => "check_inventory",
            Operation::ProcessPayment => "process_payment",
            Operation::CreateOrder => "create_order",
            Operation::SendNotification => "send_notification",
        };
        f.write_str(name)
    }
}
