//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The store sits behind a
/// single lock: reads share it, and each mutating request holds the write
/// guard until its response is built so validation and writes cannot
/// interleave with another request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: RwLock<Store>,
}

impl AppState {
    /// Create application state owning `store`.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: RwLock::new(store),
            }),
        }
    }

    /// Acquire shared read access to the store.
    pub async fn store(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.store.read().await
    }

    /// Acquire exclusive write access to the store.
    pub async fn store_mut(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.store.write().await
    }
}
