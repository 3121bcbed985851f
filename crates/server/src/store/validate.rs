//! Reference validators used before writes that must not dangle.

use recmart_core::{Product, ProductId, User, UserId};

use super::{Store, StoreError};

impl Store {
    /// Return the user with `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidUser` if no such user exists.
    pub fn validate_user(&self, id: UserId) -> Result<&User, StoreError> {
        self.user(id).ok_or(StoreError::InvalidUser(id))
    }

    /// Return the product with `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidProduct` if no such product exists.
    pub fn validate_product(&self, id: ProductId) -> Result<&Product, StoreError> {
        self.product(id).ok_or(StoreError::InvalidProduct(id))
    }
}
