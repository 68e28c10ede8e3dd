//! Cart subcommands.

use herd_market_core::ListingId;
use herd_market_storefront::backend::ListingSource;
use herd_market_storefront::{CartStore, Result, Storefront};
use tracing::{info, warn};

use super::{fetch_listing, report};

/// Print every cart line with the count and total.
pub fn show(cart: &CartStore) {
    for line in cart.lines() {
        info!(
            quantity = line.quantity,
            line_total = %line.line_total(),
            "{}",
            super::catalog::summary(&line.listing)
        );
    }
    info!(
        items = cart.cart_count(),
        total = %cart.cart_total(),
        "Cart"
    );
}

/// Look up the listing in the catalog and add one unit to the cart.
///
/// # Errors
///
/// Returns an error if the listing cannot be found.
pub async fn add<S: ListingSource>(storefront: &mut Storefront<S>, id: &ListingId) -> Result<()> {
    let listing = fetch_listing(storefront, id).await?;
    report(&storefront.cart.add_to_cart(&listing));
    info!(items = storefront.cart.cart_count(), "Cart updated");
    Ok(())
}

pub fn remove(cart: &mut CartStore, id: &ListingId) {
    if !cart.is_in_cart(id) {
        warn!(%id, "Listing is not in the cart");
        return;
    }
    report(&cart.remove_from_cart(id));
}

/// Set the quantity of a cart line. Zero or less removes the line.
pub fn set_quantity(cart: &mut CartStore, id: &ListingId, quantity: i64) {
    if !cart.is_in_cart(id) {
        warn!(%id, "Listing is not in the cart");
        return;
    }
    if let Some(notice) = cart.update_quantity(id, quantity) {
        report(&notice);
    }
    info!(
        %id,
        quantity = cart.quantity_of(id).unwrap_or(0),
        total = %cart.cart_total(),
        "Cart updated"
    );
}
