//! The set of stores a storefront session works with.

use std::sync::Arc;

use crate::backend::{HttpListingSource, ListingSource};
use crate::cart::CartStore;
use crate::catalog::CatalogStore;
use crate::config::StorefrontConfig;
use crate::notifications::NotificationStore;
use crate::storage::{FileStorage, SharedStorage};
use crate::wishlist::WishlistStore;

/// All storefront stores, constructed together and handed to the
/// presentation layer.
///
/// Persisted stores are loaded from storage on construction. The catalog
/// starts empty until [`CatalogStore::initialize`] is awaited.
pub struct Storefront<S> {
    pub catalog: CatalogStore<S>,
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    pub notifications: NotificationStore,
}

impl<S: ListingSource> Storefront<S> {
    /// Build the stores over an explicit listing source and storage.
    #[must_use]
    pub fn new(source: S, storage: SharedStorage) -> Self {
        Self {
            catalog: CatalogStore::new(source),
            cart: CartStore::load(Arc::clone(&storage)),
            wishlist: WishlistStore::load(Arc::clone(&storage)),
            notifications: NotificationStore::load(storage),
        }
    }
}

impl Storefront<HttpListingSource> {
    /// Build the stores against the configured backend and data directory.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        let storage: SharedStorage = Arc::new(FileStorage::new(config.data_dir.clone()));
        Self::new(HttpListingSource::new(&config.backend), storage)
    }
}
