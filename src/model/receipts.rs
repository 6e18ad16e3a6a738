//! Results returned by the downstream operations.

use crate::model::{LineItem, OrderId};
use serde::{Deserialize, Serialize};

/// Result of an inventory check. Only `available` is acted upon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryResult {
    pub available: bool,
    pub items: Vec<LineItem>,
}

/// Result of a payment attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub approved: bool,
    pub transaction_id: String,
    pub amount: f64,
}

/// Confirmation that a notification went out.
///
/// `order_id` is `None` when the notification referenced a submitted order that had no
/// record yet (see [`OrderRef::Submitted`](crate::model::OrderRef::Submitted)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationReceipt {
    pub sent: bool,
    pub recipient: String,
    pub order_id: Option<OrderId>,
}
