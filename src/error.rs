//! Error types for the fulfillment workflow.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Failures reported by the downstream operations.
///
/// Each variant is terminal for the step that produced it. Strategies surface the first one
/// they see unchanged; only the Resilient strategy reacts to it, by falling back once.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FulfillmentError {
    /// The customer id did not resolve to a customer.
    #[error("Customer not found: {customer_id}")]
    CustomerNotFound { customer_id: i64 },

    /// At least one item has no stock left.
    #[error("Items out of stock: {}", .items.join(", "))]
    OutOfStock { items: Vec<String> },

    /// The amount is outside the accepted payment range.
    #[error("Invalid payment amount: {amount}")]
    InvalidAmount { amount: f64 },

    /// The payment provider answered but did not approve the charge.
    #[error("Payment declined: {transaction_id}")]
    PaymentDeclined { transaction_id: String },

    /// The notification address is not a usable email address.
    #[error("Invalid notification address: {address:?}")]
    InvalidAddress { address: String },
}

impl FulfillmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FulfillmentError::CustomerNotFound { .. } => ErrorKind::CustomerNotFound,
            FulfillmentError::OutOfStock { .. } => ErrorKind::OutOfStock,
            FulfillmentError::InvalidAmount { .. } => ErrorKind::InvalidAmount,
            FulfillmentError::PaymentDeclined { .. } => ErrorKind::PaymentDeclined,
            FulfillmentError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
        }
    }
}

/// Discriminant of a [`FulfillmentError`], carried inside failure outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    CustomerNotFound,
    OutOfStock,
    InvalidAmount,
    PaymentDeclined,
    InvalidAddress,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::CustomerNotFound => "customer_not_found",
            ErrorKind::OutOfStock => "out_of_stock",
            ErrorKind::InvalidAmount => "invalid_amount",
            ErrorKind::PaymentDeclined => "payment_declined",
            ErrorKind::InvalidAddress => "invalid_address",
        };
        f.write_str(name)
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_variant() {
        let err = FulfillmentError::OutOfStock {
            items: vec!["A".into(), "B".into()],
        };
        assert_eq!(err.kind(), ErrorKind::OutOfStock);
        assert_eq!(err.to_string(), "Items out of stock: A, B");

        let err = FulfillmentError::CustomerNotFound { customer_id: -1 };
        assert_eq!(err.kind(), ErrorKind::CustomerNotFound);
        assert_eq!(err.to_string(), "Customer not found: -1");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::InvalidAmount.to_string(), "invalid_amount");
        assert_eq!(ErrorKind::InvalidAddress.to_string(), "invalid_address");
    }
}
