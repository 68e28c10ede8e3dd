//! Shopping cart.
//!
//! The cart holds at most one line per listing. Quantities are always at
//! least one; lowering a quantity to zero removes the line. Count and total
//! are derived from the lines on every read so they cannot drift.

use herd_market_core::{Listing, ListingId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::notice::Notice;
use crate::storage::{
    SharedStorage, clear_collection, keys, load_collection, persist_collection,
};

/// A listing together with how many the buyer wants.
///
/// Persisted as the listing's own fields plus `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub listing: Listing,
    pub quantity: u32,
}

impl CartLine {
    /// Price multiplied by quantity, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.listing.price.line_total(self.quantity)
    }
}

/// Cart state, mirrored to durable storage after every mutation.
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: SharedStorage,
}

impl CartStore {
    /// Create the cart from whatever storage holds.
    ///
    /// Malformed or missing data yields an empty cart. Lines with a zero
    /// quantity and repeated listing IDs are dropped.
    #[must_use]
    pub fn load(storage: SharedStorage) -> Self {
        let mut lines: Vec<CartLine> = load_collection(storage.as_ref(), keys::CART);

        let before = lines.len();
        let mut seen: Vec<ListingId> = Vec::with_capacity(lines.len());
        lines.retain(|line| {
            if line.quantity == 0 || seen.contains(&line.listing.id) {
                return false;
            }
            seen.push(line.listing.id.clone());
            true
        });
        if lines.len() != before {
            tracing::warn!(
                dropped = before - lines.len(),
                "Dropped invalid persisted cart lines"
            );
        }

        Self { lines, storage }
    }

    /// Add one unit of `listing`.
    ///
    /// Increments the existing line if the listing is already in the cart.
    #[instrument(skip(self, listing), fields(listing_id = %listing.id))]
    pub fn add_to_cart(&mut self, listing: &Listing) -> Notice {
        let notice = if let Some(line) = self.line_mut(&listing.id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::info!(quantity = line.quantity, "Listing already in cart, quantity increased");
            Notice::AlreadyInCart {
                name: listing.name.clone(),
            }
        } else {
            self.lines.push(CartLine {
                listing: listing.clone(),
                quantity: 1,
            });
            tracing::info!("Listing added to cart");
            Notice::AddedToCart {
                name: listing.name.clone(),
            }
        };

        add_breadcrumb("cart", "Added to cart", Some(&[("listing_id", listing.id.as_str())]));
        self.persist();
        notice
    }

    /// Remove the line for `id`. Missing IDs are ignored.
    #[instrument(skip(self), fields(listing_id = %id))]
    pub fn remove_from_cart(&mut self, id: &ListingId) -> Notice {
        let before = self.lines.len();
        self.lines.retain(|line| &line.listing.id != id);
        tracing::info!(removed = before != self.lines.len(), "Removed from cart");

        add_breadcrumb("cart", "Removed from cart", Some(&[("listing_id", id.as_str())]));
        self.persist();
        Notice::RemovedFromCart
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of zero or less removes the line and returns its notice.
    /// Quantities are stored as `u32`; anything larger is clamped to
    /// `u32::MAX`. Unknown IDs are ignored.
    pub fn update_quantity(&mut self, id: &ListingId, quantity: i64) -> Option<Notice> {
        if quantity <= 0 {
            return Some(self.remove_from_cart(id));
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.line_mut(id) {
            Some(line) => {
                line.quantity = quantity;
                tracing::info!(listing_id = %id, quantity, "Cart quantity updated");
                self.persist();
            }
            None => {
                tracing::debug!(listing_id = %id, "Quantity update for listing not in cart");
            }
        }
        None
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> Notice {
        self.lines.clear();
        tracing::info!("Cart cleared");
        add_breadcrumb("cart", "Cleared cart", None);
        clear_collection(self.storage.as_ref(), keys::CART);
        Notice::CartCleared
    }

    /// Whether the listing has a line in the cart.
    #[must_use]
    pub fn is_in_cart(&self, id: &ListingId) -> bool {
        self.lines.iter().any(|line| &line.listing.id == id)
    }

    /// Quantity held for the listing, if it is in the cart.
    #[must_use]
    pub fn quantity_of(&self, id: &ListingId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| &line.listing.id == id)
            .map(|line| line.quantity)
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price × quantity across all lines.
    ///
    /// Saturates at [`Decimal::MAX`] instead of overflowing.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .try_fold(Decimal::ZERO, Decimal::checked_add)
            .unwrap_or(Decimal::MAX)
    }

    fn line_mut(&mut self, id: &ListingId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.listing.id == id)
    }

    fn persist(&self) {
        persist_collection(self.storage.as_ref(), keys::CART, &self.lines);
    }
}
