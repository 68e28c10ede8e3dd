//! Subcommand implementations.

pub mod cart;
pub mod catalog;
pub mod notifications;
pub mod wishlist;

use herd_market_core::{Listing, ListingId};
use herd_market_storefront::backend::ListingSource;
use herd_market_storefront::notice::NoticeLevel;
use herd_market_storefront::{Error, Notice, Result, Storefront};
use tracing::info;

/// Log a store notice the way the storefront would toast it.
pub fn report(notice: &Notice) {
    match notice.level() {
        NoticeLevel::Success => info!(level = "success", "{notice}"),
        NoticeLevel::Info => info!(level = "info", "{notice}"),
    }
}

/// Fetch the catalog and return a copy of the listing with `id`.
///
/// # Errors
///
/// Returns [`Error::CatalogUnavailable`] if the catalog could not be loaded
/// and [`Error::NotFound`] if it has no listing with that ID.
pub async fn fetch_listing<S: ListingSource>(
    storefront: &mut Storefront<S>,
    id: &ListingId,
) -> Result<Listing> {
    storefront.catalog.initialize().await;

    if storefront.catalog.load_failed() {
        return Err(Error::CatalogUnavailable);
    }

    storefront
        .catalog
        .listing(id)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("Listing {id}")))
}
