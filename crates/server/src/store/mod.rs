//! In-memory data store.
//!
//! # Tables
//!
//! - `users` - Registered users
//! - `products` - Product catalogue
//! - `orders` - Placed orders (immutable)
//! - `browse_history` - Products each user has viewed
//! - `purchase_history` - Products each user has bought
//!
//! Nothing is persisted; state resets on restart. The store has no internal
//! synchronization. [`crate::state::AppState`] owns it behind a single lock
//! and every mutating request holds the write guard for its whole duration.

mod history;
mod seed;
mod sequence;
mod validate;

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use recmart_core::{NewProduct, NewUser, Order, OrderId, Product, ProductId, User, UserId};
use thiserror::Error;

pub use history::HistoryKind;

/// Errors raised by store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Referenced user does not exist.
    #[error("invalid user {0}")]
    InvalidUser(UserId),

    /// Referenced product does not exist.
    #[error("invalid product {0}")]
    InvalidProduct(ProductId),

    /// The next id would overflow the id type.
    #[error("id sequence exhausted for table {0}")]
    SequenceExhausted(Table),
}

/// Tables that draw ids from the sequence generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Users,
    Products,
    Orders,
}

impl Table {
    /// Table name as used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Products => "products",
            Self::Orders => "orders",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of tables backing the API.
#[derive(Debug, Clone, Default)]
pub struct Store {
    users: Vec<User>,
    products: Vec<Product>,
    orders: Vec<Order>,
    browse_history: HashMap<UserId, BTreeSet<ProductId>>,
    purchase_history: HashMap<UserId, BTreeSet<ProductId>>,
}

impl Store {
    /// Create a store with empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// All users in creation order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a user by id.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Insert a user under the next id of the `users` table.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SequenceExhausted` if no further id is available.
    pub fn create_user(&mut self, new: NewUser) -> Result<User, StoreError> {
        let id = UserId::new(self.next_sequence_id(Table::Users)?);
        let user = User { id, name: new.name };
        self.users.push(user.clone());
        tracing::debug!(user_id = %id, "user created");
        Ok(user)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// All products in creation order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Insert a product under the next id of the `products` table.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SequenceExhausted` if no further id is available.
    pub fn create_product(&mut self, new: NewProduct) -> Result<Product, StoreError> {
        let id = ProductId::new(self.next_sequence_id(Table::Products)?);
        let product = Product { id, name: new.name };
        self.products.push(product.clone());
        tracing::debug!(product_id = %id, "product created");
        Ok(product)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// All orders in creation order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by id.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Orders placed by the given customer, in creation order.
    #[must_use]
    pub fn orders_for(&self, customer: UserId) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.customer_id == customer)
            .collect()
    }

    /// Append an already-validated order.
    ///
    /// Callers are responsible for reference checks; see
    /// [`crate::services::ordering::place_order`].
    pub(crate) fn push_order(&mut self, order: Order) {
        self.orders.push(order);
    }
}
