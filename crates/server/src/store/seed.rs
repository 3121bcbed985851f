//! Demo catalogue loaded at startup when `RECMART_SEED_DEMO_DATA` is set.

use std::collections::{BTreeSet, HashMap};

use recmart_core::{Order, OrderId, Orderline, Product, ProductId, User, UserId};

use super::Store;

const USERS: &[(i32, &str)] = &[(1, "Rohit"), (2, "Ashish"), (3, "Suraj")];

const PRODUCTS: &[(i32, &str)] = &[
    (1, "Philips 3 in 1 trimmer"),
    (2, "Boat neck band"),
    (3, "JBL GO3"),
    (4, "Puma Sandal"),
];

/// `(order id, customer id, [(product id, qty)])`
const ORDERS: &[(i32, i32, &[(i32, i32)])] = &[
    (1, 3, &[(2, 3), (4, 1)]),
    (2, 1, &[(2, 2)]),
    (3, 3, &[(1, 4), (2, 1)]),
    (4, 2, &[(4, 2), (3, 1)]),
];

const BROWSE_HISTORY: &[(i32, &[i32])] = &[(1, &[4, 2]), (2, &[3, 1, 2]), (3, &[4, 3, 2, 1])];

const PURCHASE_HISTORY: &[(i32, &[i32])] = &[(1, &[2]), (2, &[4, 3]), (3, &[2, 4, 1])];

impl Store {
    /// Create a store pre-populated with the demo catalogue.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            users: USERS
                .iter()
                .map(|&(id, name)| User {
                    id: UserId::new(id),
                    name: name.to_string(),
                })
                .collect(),
            products: PRODUCTS
                .iter()
                .map(|&(id, name)| Product {
                    id: ProductId::new(id),
                    name: name.to_string(),
                })
                .collect(),
            orders: ORDERS
                .iter()
                .map(|&(id, customer, lines)| Order {
                    id: OrderId::new(id),
                    customer_id: UserId::new(customer),
                    orderlines: lines
                        .iter()
                        .map(|&(product, qty)| Orderline {
                            product_id: ProductId::new(product),
                            qty,
                        })
                        .collect(),
                })
                .collect(),
            browse_history: history_table(BROWSE_HISTORY),
            purchase_history: history_table(PURCHASE_HISTORY),
        }
    }
}

fn history_table(rows: &[(i32, &[i32])]) -> HashMap<UserId, BTreeSet<ProductId>> {
    rows.iter()
        .map(|&(user, products)| {
            (
                UserId::new(user),
                products.iter().copied().map(ProductId::new).collect(),
            )
        })
        .collect()
}
