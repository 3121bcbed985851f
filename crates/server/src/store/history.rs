//! Browse and purchase history tracking.
//!
//! A write for a user id that is not in the `users` table is dropped
//! without an error. Callers that need the user to exist must validate
//! first.

use std::collections::BTreeSet;

use recmart_core::{ProductId, UserId};

use super::Store;

/// Which history table to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Browse,
    Purchase,
}

impl HistoryKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Browse => "browse",
            Self::Purchase => "purchase",
        }
    }
}

impl Store {
    /// Record that `user_id` viewed `product_id`.
    ///
    /// Returns `false` if the user is unknown and nothing was recorded.
    pub fn record_browse(&mut self, user_id: UserId, product_id: ProductId) -> bool {
        self.record(HistoryKind::Browse, user_id, product_id)
    }

    /// Record that `user_id` bought `product_id`.
    ///
    /// Returns `false` if the user is unknown and nothing was recorded.
    pub fn record_purchase(&mut self, user_id: UserId, product_id: ProductId) -> bool {
        self.record(HistoryKind::Purchase, user_id, product_id)
    }

    fn record(&mut self, kind: HistoryKind, user_id: UserId, product_id: ProductId) -> bool {
        let user_known = self.user(user_id).is_some();
        let table = match kind {
            HistoryKind::Browse => &mut self.browse_history,
            HistoryKind::Purchase => &mut self.purchase_history,
        };

        if let Some(products) = table.get_mut(&user_id) {
            products.insert(product_id);
        } else if user_known {
            tracing::info!(
                user_id = %user_id,
                history = kind.as_str(),
                "first history entry for user"
            );
            table.insert(user_id, BTreeSet::from([product_id]));
        } else {
            tracing::warn!(
                user_id = %user_id,
                product_id = %product_id,
                history = kind.as_str(),
                "history write dropped for unknown user"
            );
            return false;
        }

        tracing::debug!(
            user_id = %user_id,
            product_id = %product_id,
            history = kind.as_str(),
            "product added to history"
        );
        true
    }

    /// Product ids in the given history of a user (empty if none).
    #[must_use]
    pub fn history(&self, kind: HistoryKind, user_id: UserId) -> BTreeSet<ProductId> {
        let table = match kind {
            HistoryKind::Browse => &self.browse_history,
            HistoryKind::Purchase => &self.purchase_history,
        };
        table.get(&user_id).cloned().unwrap_or_default()
    }
}
