//! # Mock Downstream Services & Testing Guide
//!
//! [`MockServices`] implements [`FulfillmentServices`] with the same rules as the simulation but
//! lets a test steer every operation and inspect what happened afterwards.
//!
//! | Feature | MockServices | SimulatedServices |
//! |---------|--------------|-------------------|
//! | **Latency** | Zero by default, per-operation overrides | Configured profile |
//! | **Failures** | Injected per operation, optionally only N times | Rule-driven only |
//! | **Journal** | Start/finish of every call, in order | None |
//!
//! ## Example
//!
//! ```rust
//! use order_orchestrator::error::FulfillmentError;
//! use order_orchestrator::model::{LineItem, Order};
//! use order_orchestrator::services::mock::MockServices;
//! use order_orchestrator::services::Operation;
//! use order_orchestrator::strategy::sequential;
//!
//! #[tokio::main]
//! async fn main() {
//!     let services = MockServices::new();
//!     services.fail(
//!         Operation::ProcessPayment,
//!         FulfillmentError::InvalidAmount { amount: 1.0 },
//!     );
//!
//!     let order = Order::new(1, vec![LineItem::new("A", 1)], 1.0);
//!     let result = sequential::execute(&services, &order).await;
//!
//!     assert!(result.is_err());
//!     assert_eq!(services.call_count(Operation::CreateOrder), 0);
//! }
//! ```

use super::simulated::simulate_latency;
use super::{rules, FulfillmentServices, Operation};
use crate::config::LatencyProfile;
use crate::error::FulfillmentError;
use crate::model::{
    CreatedOrder, Customer, InventoryResult, LineItem, NotificationReceipt, Order, OrderId,
    OrderRef, PaymentResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// What happened to a call at one point of the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallEvent {
    Started,
    Finished { ok: bool },
}

/// One journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallRecord {
    pub op: Operation,
    pub event: CallEvent,
}

struct InjectedFailure {
    error: FulfillmentError,
    remaining: Option<usize>,
}

/// A scriptable [`FulfillmentServices`] for tests.
pub struct MockServices {
    latency: LatencyProfile,
    customer_email: Option<String>,
    orders: rules::IdSequence,
    transactions: rules::IdSequence,
    failures: Mutex<HashMap<Operation, InjectedFailure>>,
    inventory_unavailable: AtomicBool,
    payment_declined: AtomicBool,
    journal: Mutex<Vec<CallRecord>>,
    notifications: Mutex<Vec<Option<OrderId>>>,
}

impl MockServices {
    pub fn new() -> Self {
        Self {
            latency: LatencyProfile::zero(),
            customer_email: None,
            orders: rules::IdSequence::new(),
            transactions: rules::IdSequence::new(),
            failures: Mutex::new(HashMap::new()),
            inventory_unavailable: AtomicBool::new(false),
            payment_declined: AtomicBool::new(false),
            journal: Mutex::new(Vec::new()),
            notifications: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the whole latency profile.
    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Overrides the delay of a single operation.
    pub fn with_delay(mut self, op: Operation, ms: u64) -> Self {
        match op {
            Operation::ValidateCustomer => self.latency.validate_customer_ms = ms,
            Operation::CheckInventory => self.latency.check_inventory_ms = ms,
            Operation::ProcessPayment => self.latency.process_payment_ms = ms,
            Operation::CreateOrder => self.latency.create_order_ms = ms,
            Operation::SendNotification => self.latency.send_notification_ms = ms,
        }
        self
    }

    /// Validated customers get this email instead of the generated one.
    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    /// Makes every call to `op` fail with `error`.
    pub fn fail(&self, op: Operation, error: FulfillmentError) {
        self.inject(op, error, None);
    }

    /// Makes the next `times` calls to `op` fail with `error`; later calls follow the rules.
    pub fn fail_times(&self, op: Operation, error: FulfillmentError, times: usize) {
        self.inject(op, error, Some(times));
    }

    pub fn clear_failure(&self, op: Operation) {
        self.failures.lock().unwrap().remove(&op);
    }

    /// Inventory checks succeed but report `available: false`.
    pub fn report_unavailable(&self) {
        self.inventory_unavailable.store(true, Ordering::SeqCst);
    }

    /// Payments succeed but report `approved: false`.
    pub fn decline_payments(&self) {
        self.payment_declined.store(true, Ordering::SeqCst);
    }

    /// Every journal entry so far, in the order they happened.
    pub fn calls(&self) -> Vec<CallRecord> {
        self.journal.lock().unwrap().clone()
    }

    /// Operations in the order they were started.
    pub fn started(&self) -> Vec<Operation> {
        self.calls()
            .into_iter()
            .filter(|r| r.event == CallEvent::Started)
            .map(|r| r.op)
            .collect()
    }

    pub fn call_count(&self, op: Operation) -> usize {
        self.started().into_iter().filter(|o| *o == op).count()
    }

    /// Journal position of the first start of `op`.
    pub fn position_started(&self, op: Operation) -> Option<usize> {
        self.calls()
            .iter()
            .position(|r| r.op == op && r.event == CallEvent::Started)
    }

    /// Journal position of the first finish of `op` with the given result.
    pub fn position_finished(&self, op: Operation, ok: bool) -> Option<usize> {
        self.calls()
            .iter()
            .position(|r| r.op == op && r.event == CallEvent::Finished { ok })
    }

    /// The order id referenced by each notification that was sent.
    pub fn notified_order_ids(&self) -> Vec<Option<OrderId>> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn reset_journal(&self) {
        self.journal.lock().unwrap().clear();
        self.notifications.lock().unwrap().clear();
    }

    fn inject(&self, op: Operation, error: FulfillmentError, remaining: Option<usize>) {
        self.failures
            .lock()
            .unwrap()
            .insert(op, InjectedFailure { error, remaining });
    }

    fn take_failure(&self, op: Operation) -> Option<FulfillmentError> {
        let mut failures = self.failures.lock().unwrap();
        let injected = failures.get_mut(&op)?;
        match injected.remaining {
            None => Some(injected.error.clone()),
            Some(0) => None,
            Some(ref mut n) => {
                *n -= 1;
                Some(injected.error.clone())
            }
        }
    }

    fn delay(&self, op: Operation) -> Duration {
        match op {
            Operation::ValidateCustomer => self.latency.validate_customer(),
            Operation::CheckInventory => self.latency.check_inventory(),
            Operation::ProcessPayment => self.latency.process_payment(),
            Operation::CreateOrder => self.latency.create_order(),
            Operation::SendNotification => self.latency.send_notification(),
        }
    }

    fn log(&self, op: Operation, event: CallEvent) {
        self.journal.lock().unwrap().push(CallRecord { op, event });
    }

    async fn call<T, F>(&self, op: Operation, rule: F) -> Result<T, FulfillmentError>
    where
        T: Send,
        F: FnOnce() -> Result<T, FulfillmentError> + Send,
    {
        self.log(op, CallEvent::Started);
        simulate_latency(op, self.delay(op)).await;
        let result = match self.take_failure(op) {
            Some(error) => Err(error),
            None => rule(),
        };
        self.log(op, CallEvent::Finished { ok: result.is_ok() });
        result
    }
}

impl Default for MockServices {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FulfillmentServices for MockServices {
    async fn validate_customer(&self, customer_id: i64) -> Result<Customer, FulfillmentError> {
        self.call(Operation::ValidateCustomer, || {
            let mut customer = rules::validate_customer(customer_id)?;
            if let Some(email) = &self.customer_email {
                customer.email = email.clone();
            }
            Ok(customer)
        })
        .await
    }

    async fn check_inventory(&self, items: &[LineItem]) -> Result<InventoryResult, FulfillmentError> {
        self.call(Operation::CheckInventory, || {
            let mut result = rules::check_inventory(items)?;
            if self.inventory_unavailable.load(Ordering::SeqCst) {
                result.available = false;
            }
            Ok(result)
        })
        .await
    }

    async fn process_payment(&self, amount: f64) -> Result<PaymentResult, FulfillmentError> {
        self.call(Operation::ProcessPayment, || {
            let mut payment = rules::process_payment(amount, self.transactions.next_id())?;
            if self.payment_declined.load(Ordering::SeqCst) {
                payment.approved = false;
            }
            Ok(payment)
        })
        .await
    }

    async fn create_order(
        &self,
        order: &Order,
        customer: &Customer,
    ) -> Result<CreatedOrder, FulfillmentError> {
        self.call(Operation::CreateOrder, || {
            Ok(rules::create_order(
                OrderId(self.orders.next_id()),
                order,
                customer,
            ))
        })
        .await
    }

    async fn send_notification(
        &self,
        address: &str,
        order: OrderRef<'_>,
    ) -> Result<NotificationReceipt, FulfillmentError> {
        let receipt = self
            .call(Operation::SendNotification, || {
                rules::send_notification(address, order)
            })
            .await?;
        self.notifications
            .lock()
            .unwrap()
            .push(receipt.order_id.clone());
        Ok(receipt)
    }
}
