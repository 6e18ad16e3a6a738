//! Sequential strategy: five steps in strict order.

use crate::error::FulfillmentError;
use crate::model::{CreatedOrder, Order, OrderRef};
use crate::services::FulfillmentServices;
use tracing::{debug, info, instrument};

/// Runs validate → inventory → payment → create → notify, each step only after the previous
/// one succeeded. The first failure ends the run and is returned unchanged.
#[instrument(skip_all, fields(customer_id = order.customer_id))]
pub async fn execute(
    services: &dyn FulfillmentServices,
    order: &Order,
) -> Result<CreatedOrder, FulfillmentError> {
    info!("Starting sequential processing");

    let customer = services.validate_customer(order.customer_id).await?;
    debug!(name = %customer.name, "Customer validated");

    let inventory = services.check_inventory(&order.items).await?;
    if !inventory.available {
        return Err(super::unavailable(order));
    }
    debug!("Inventory checked");

    let payment = services.process_payment(order.total).await?;
    if !payment.approved {
        return Err(FulfillmentError::PaymentDeclined {
            transaction_id: payment.transaction_id,
        });
    }
    debug!(amount = payment.amount, transaction_id = %payment.transaction_id, "Payment processed");

    let created = services.create_order(order, &customer).await?;
    debug!(order_id = %created.id, "Order created");

    let receipt = services
        .send_notification(&customer.email, OrderRef::Created(&created))
        .await?;
    debug!(recipient = %receipt.recipient, "Notification sent");

    Ok(created)
}
