//! Sequence generator: next id is the table's current maximum plus one.

use super::{Store, StoreError, Table};

impl Store {
    /// Compute the next id for `table`.
    ///
    /// An empty table starts at `1`. Ids are never reused because records
    /// are never deleted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SequenceExhausted` if `max + 1` overflows `i32`.
    pub fn next_sequence_id(&self, table: Table) -> Result<i32, StoreError> {
        let max = match table {
            Table::Users => self.users.iter().map(|u| u.id.as_i32()).max(),
            Table::Products => self.products.iter().map(|p| p.id.as_i32()).max(),
            Table::Orders => self.orders.iter().map(|o| o.id.as_i32()).max(),
        };

        match max {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or(StoreError::SequenceExhausted(table)),
        }
    }
}
