//! Order records.
//!
//! Orders are immutable once placed. An [`Orderline`] has no identity of its
//! own and only ever appears inside an [`Order`].

use serde::{Deserialize, Serialize};

use super::{OrderId, ProductId, UserId};

/// A single line of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orderline {
    pub product_id: ProductId,
    pub qty: i32,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub orderlines: Vec<Orderline>,
}

impl Order {
    /// Product ids referenced by this order, in line order (may repeat).
    pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.orderlines.iter().map(|line| line.product_id)
    }
}

/// Payload for placing an order. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_id: UserId,
    pub orderlines: Vec<Orderline>,
}
