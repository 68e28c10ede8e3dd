//! Browse the listing catalog.

use herd_market_core::Listing;
use herd_market_storefront::backend::ListingSource;
use herd_market_storefront::{Error, FilterUpdate, Result, Storefront};
use tracing::info;

/// Fetch listings, apply `filters`, and print the matches.
///
/// # Errors
///
/// Returns [`Error::CatalogUnavailable`] if the catalog could not be fetched.
pub async fn browse<S: ListingSource>(
    storefront: &mut Storefront<S>,
    filters: FilterUpdate,
) -> Result<()> {
    let catalog = &mut storefront.catalog;
    catalog.initialize().await;

    if catalog.load_failed() {
        return Err(Error::CatalogUnavailable);
    }

    catalog.update_filters(filters);

    for listing in catalog.filtered() {
        let in_cart = storefront.cart.is_in_cart(&listing.id);
        let saved = storefront.wishlist.is_in_wishlist(&listing.id);
        info!(in_cart, saved, "{}", summary(listing));
    }

    info!(
        shown = catalog.filtered_count(),
        total = catalog.listings().len(),
        "Catalog listed"
    );
    Ok(())
}

/// One-line description of a listing.
pub fn summary(listing: &Listing) -> String {
    let mut line = format!(
        "[{}] {} ({}",
        listing.id,
        listing.name,
        listing.category.as_str()
    );
    if !listing.breed.is_empty() {
        line.push_str(", ");
        line.push_str(&listing.breed);
    }
    line.push_str(") ");
    line.push_str(&listing.price.to_string());
    if !listing.location.is_empty() {
        line.push_str(" - ");
        line.push_str(&listing.location);
    }
    if listing.occasion_eligible {
        line.push_str(" [occasion]");
    }
    line
}
