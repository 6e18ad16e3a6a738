//! Concurrent-optimized strategy.
//!
//! Customer validation runs first because every later step needs the customer. After that the
//! workflow runs as two concurrent pairs:
//!
//! 1. payment ‖ inventory check
//! 2. order creation ‖ notification
//!
//! A pair fails as a whole with the first failure observed, but only once its sibling has
//! finished as well. The sibling is never cancelled and its result is dropped; nothing is
//! compensated.
//!
//! The notification in the second pair goes out together with order creation, so it refers to
//! the submitted order instead of the created record. Sequential processing refers to the created
//! record; the two strategies therefore differ in the `order_id` of the receipt.

use crate::error::FulfillmentError;
use crate::model::{CreatedOrder, Order, OrderRef};
use crate::services::FulfillmentServices;
use std::future::Future;
use tracing::{debug, info, instrument};

#[instrument(skip_all, fields(customer_id = order.customer_id))]
pub async fn execute(
    services: &dyn FulfillmentServices,
    order: &Order,
) -> Result<CreatedOrder, FulfillmentError> {
    info!("Starting concurrent processing");

    let customer = services.validate_customer(order.customer_id).await?;
    debug!(name = %customer.name, "Customer validated");

    let (payment, inventory) = join_pair(
        services.process_payment(order.total),
        services.check_inventory(&order.items),
    )
    .await?;
    if !inventory.available {
        return Err(super::unavailable(order));
    }
    if !payment.approved {
        return Err(FulfillmentError::PaymentDeclined {
            transaction_id: payment.transaction_id,
        });
    }
    debug!(amount = payment.amount, transaction_id = %payment.transaction_id, "Payment and inventory done");

    let (created, receipt) = join_pair(
        services.create_order(order, &customer),
        services.send_notification(&customer.email, OrderRef::Submitted(order)),
    )
    .await?;
    debug!(order_id = %created.id, recipient = %receipt.recipient, "Order created and notification sent");

    Ok(created)
}

/// Drives both futures at the same time until both have completed.
///
/// Returns the first failure observed, or both values when neither failed. When both sides
/// complete in the same poll, `left` is observed first.
pub async fn join_pair<A, B>(
    left: impl Future<Output = Result<A, FulfillmentError>>,
    right: impl Future<Output = Result<B, FulfillmentError>>,
) -> Result<(A, B), FulfillmentError> {
    tokio::pin!(left);
    tokio::pin!(right);

    tokio::select! {
        biased;

        result = &mut left => {
            if let Err(e) = &result {
                debug!(error = %e, "Left side failed, awaiting sibling");
            }
            let sibling = right.await;
            Ok((result?, sibling?))
        }
        result = &mut right => {
            if let Err(e) = &result {
                debug!(error = %e, "Right side failed, awaiting sibling");
            }
            let sibling = left.await;
            let value = result?;
            Ok((sibling?, value))
        }
    }
}
