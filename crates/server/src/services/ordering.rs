//! Order placement.

use std::collections::BTreeSet;

use recmart_core::{NewOrder, Order, OrderId, ProductId};

use crate::store::{Store, StoreError, Table};

/// Validate and place an order.
///
/// Every reference is checked before anything is written, so a rejected
/// order leaves all tables untouched. On success the customer's purchase
/// history gains each distinct product in the order.
///
/// # Errors
///
/// - `StoreError::InvalidUser` if the customer does not exist
/// - `StoreError::InvalidProduct` for the first orderline naming an unknown product
/// - `StoreError::SequenceExhausted` if no order id is available
pub fn place_order(store: &mut Store, new: NewOrder) -> Result<Order, StoreError> {
    let customer = store.validate_user(new.customer_id)?.id;
    for line in &new.orderlines {
        store.validate_product(line.product_id)?;
    }

    let id = OrderId::new(store.next_sequence_id(Table::Orders)?);

    let purchased: BTreeSet<ProductId> = new.orderlines.iter().map(|l| l.product_id).collect();
    for product_id in purchased {
        store.record_purchase(customer, product_id);
    }

    let order = Order {
        id,
        customer_id: customer,
        orderlines: new.orderlines,
    };
    store.push_order(order.clone());

    tracing::info!(
        order_id = %order.id,
        customer_id = %order.customer_id,
        lines = order.orderlines.len(),
        "order placed"
    );
    Ok(order)
}
