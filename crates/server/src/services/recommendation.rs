//! Product recommendations from browse and purchase history.

use std::collections::BTreeSet;

use recmart_core::{Product, ProductId, UserId};

use crate::store::{HistoryKind, Store, StoreError};

/// Recommend products for a user.
///
/// The result is every product the user has browsed or bought, in catalogue
/// order. There is no ranking.
///
/// # Errors
///
/// Returns `StoreError::InvalidUser` if the user does not exist.
pub fn recommend(store: &Store, user_id: UserId) -> Result<Vec<Product>, StoreError> {
    store.validate_user(user_id)?;

    let mut wanted: BTreeSet<ProductId> = store.history(HistoryKind::Browse, user_id);
    wanted.extend(store.history(HistoryKind::Purchase, user_id));

    Ok(store
        .products()
        .iter()
        .filter(|product| wanted.contains(&product.id))
        .cloned()
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use recmart_core::{NewProduct, NewUser};

    use super::*;

    fn product_ids(products: &[Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_recommend_unions_histories() {
        let store = Store::demo();
        let products = recommend(&store, UserId::new(1)).unwrap();
        assert_eq!(product_ids(&products), vec![2, 4]);
    }

    #[test]
    fn test_recommend_unknown_user() {
        let store = Store::demo();
        assert_eq!(
            recommend(&store, UserId::new(404)),
            Err(StoreError::InvalidUser(UserId::new(404)))
        );
    }

    #[test]
    fn test_recommend_new_user_is_empty() {
        let mut store = Store::demo();
        let user = store
            .create_user(NewUser {
                name: "Fresh".to_string(),
            })
            .unwrap();

        assert!(recommend(&store, user.id).unwrap().is_empty());
    }

    #[test]
    fn test_recommend_covers_every_recorded_product() {
        let mut store = Store::new();
        let user = store
            .create_user(NewUser {
                name: "Rohit".to_string(),
            })
            .unwrap();
        let products: Vec<_> = (0..5)
            .map(|i| {
                store
                    .create_product(NewProduct {
                        name: format!("p{i}"),
                    })
                    .unwrap()
            })
            .collect();

        store.record_browse(user.id, products[3].id);
        store.record_purchase(user.id, products[0].id);
        store.record_browse(user.id, products[0].id);

        let recommended = recommend(&store, user.id).unwrap();
        assert_eq!(product_ids(&recommended), vec![1, 4]);
    }
}
