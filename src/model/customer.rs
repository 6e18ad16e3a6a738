use serde::{Deserialize, Serialize};

/// A customer that passed validation.
///
/// Produced by [`FulfillmentServices::validate_customer`](crate::services::FulfillmentServices::validate_customer)
/// and only read afterwards: order creation takes its `id`, notification takes its `email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Customer {
    /// Creates a new Customer instance.
    ///
    /// # Arguments
    /// * `id` - Customer identifier as submitted with the order
    /// * `name` - Display name
    /// * `email` - Address used for the confirmation notification
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
