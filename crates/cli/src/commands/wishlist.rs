//! Wishlist subcommands.

use herd_market_core::ListingId;
use herd_market_storefront::backend::ListingSource;
use herd_market_storefront::{Result, Storefront, WishlistStore};
use tracing::info;

use super::{fetch_listing, report};

pub fn show(wishlist: &WishlistStore) {
    for listing in wishlist.entries() {
        info!("{}", super::catalog::summary(listing));
    }
    info!(saved = wishlist.wishlist_count(), "Wishlist");
}

/// Look up the listing in the catalog and save it. With `toggle`, a listing
/// that is already saved is removed instead.
///
/// # Errors
///
/// Returns an error if the listing cannot be found.
pub async fn add<S: ListingSource>(
    storefront: &mut Storefront<S>,
    id: &ListingId,
    toggle: bool,
) -> Result<()> {
    let listing = fetch_listing(storefront, id).await?;
    let notice = if toggle {
        storefront.wishlist.toggle_wishlist(&listing)
    } else {
        storefront.wishlist.add_to_wishlist(&listing)
    };
    report(&notice);
    Ok(())
}
