//! Saved listings.
//!
//! Entries are full listing snapshots because nothing is re-fetched when the
//! wishlist is shown. A listing ID appears at most once.

use herd_market_core::{Listing, ListingId};
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::notice::Notice;
use crate::storage::{
    SharedStorage, clear_collection, keys, load_collection, persist_collection,
};

/// Wishlist state, mirrored to durable storage after every mutation.
pub struct WishlistStore {
    entries: Vec<Listing>,
    storage: SharedStorage,
}

impl WishlistStore {
    /// Create the wishlist from whatever storage holds.
    #[must_use]
    pub fn load(storage: SharedStorage) -> Self {
        let mut entries: Vec<Listing> = load_collection(storage.as_ref(), keys::WISHLIST);

        let mut seen: Vec<ListingId> = Vec::with_capacity(entries.len());
        entries.retain(|listing| {
            if seen.contains(&listing.id) {
                return false;
            }
            seen.push(listing.id.clone());
            true
        });

        Self { entries, storage }
    }

    /// Save `listing`. Already-saved listings are left as they are.
    #[instrument(skip(self, listing), fields(listing_id = %listing.id))]
    pub fn add_to_wishlist(&mut self, listing: &Listing) -> Notice {
        if self.is_in_wishlist(&listing.id) {
            tracing::debug!("Listing already in wishlist");
            return Notice::AlreadyInWishlist {
                name: listing.name.clone(),
            };
        }

        self.entries.push(listing.clone());
        tracing::info!("Listing saved to wishlist");
        add_breadcrumb(
            "wishlist",
            "Saved to wishlist",
            Some(&[("listing_id", listing.id.as_str())]),
        );
        self.persist();
        Notice::AddedToWishlist {
            name: listing.name.clone(),
        }
    }

    /// Remove the entry for `id`. Missing IDs are ignored.
    #[instrument(skip(self), fields(listing_id = %id))]
    pub fn remove_from_wishlist(&mut self, id: &ListingId) -> Notice {
        let before = self.entries.len();
        self.entries.retain(|listing| &listing.id != id);
        if self.entries.len() != before {
            tracing::info!("Listing removed from wishlist");
            self.persist();
        }
        Notice::RemovedFromWishlist
    }

    /// Save `listing` if absent, remove it otherwise.
    pub fn toggle_wishlist(&mut self, listing: &Listing) -> Notice {
        if self.is_in_wishlist(&listing.id) {
            self.remove_from_wishlist(&listing.id)
        } else {
            self.add_to_wishlist(listing)
        }
    }

    /// Remove every entry.
    pub fn clear_wishlist(&mut self) -> Notice {
        self.entries.clear();
        tracing::info!("Wishlist cleared");
        clear_collection(self.storage.as_ref(), keys::WISHLIST);
        Notice::WishlistCleared
    }

    #[must_use]
    pub fn is_in_wishlist(&self, id: &ListingId) -> bool {
        self.entries.iter().any(|listing| &listing.id == id)
    }

    /// Saved listings in the order they were added.
    #[must_use]
    pub fn entries(&self) -> &[Listing] {
        &self.entries
    }

    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.entries.len()
    }

    fn persist(&self) {
        persist_collection(self.storage.as_ref(), keys::WISHLIST, &self.entries);
    }
}
