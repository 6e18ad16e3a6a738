use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One line of a submitted order together with the stock level reported for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub stock_level: i64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, stock_level: i64) -> Self {
        Self {
            name: name.into(),
            stock_level,
        }
    }

    /// An item is available while at least one unit is in stock.
    pub fn in_stock(&self) -> bool {
        self.stock_level > 0
    }
}

/// An order as submitted by a caller.
///
/// The orchestrator only ever borrows an `Order`, so it stays unchanged for the whole
/// workflow, including a Resilient fallback run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub customer_id: i64,
    pub items: Vec<LineItem>,
    pub total: f64,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `customer_id` - Customer placing the order (validated downstream)
    /// * `items` - Ordered line items
    /// * `total` - Amount to charge
    pub fn new(customer_id: i64, items: Vec<LineItem>, total: f64) -> Self {
        Self {
            customer_id,
            items,
            total,
        }
    }
}

/// Type-safe identifier for created orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ord_{}", self.0)
    }
}

/// Terminal record of a successful workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub id: OrderId,
    pub customer_id: i64,
    pub items: Vec<LineItem>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

/// The order a notification refers to.
///
/// Sequential processing notifies once the record exists, while the concurrent strategy
/// sends the notification alongside order creation and can only point at the submitted order.
#[derive(Debug, Clone, Copy)]
pub enum OrderRef<'a> {
    Created(&'a CreatedOrder),
    Submitted(&'a Order),
}

impl OrderRef<'_> {
    /// Identifier of the referenced order, if it has been created already.
    pub fn order_id(&self) -> Option<&OrderId> {
        match self {
            OrderRef::Created(order) => Some(&order.id),
            OrderRef::Submitted(_) => None,
        }
    }
}
