//! Listing catalog with a filtered view.
//!
//! The catalog fetches every listing once from its [`ListingSource`] and keeps
//! them in backend order. The filtered view is recomputed whenever the
//! listings or the filters change and always preserves that order.
//!
//! `initialize` borrows the store mutably, so two fetches can never overlap
//! on the same catalog.

mod filter;

use herd_market_core::{Listing, ListingId};
use tracing::instrument;

pub use filter::{CategoryFilter, FilterState, FilterUpdate};

use crate::backend::ListingSource;

/// Progress of the initial listing fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// `initialize` has not run yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Listings were fetched.
    Loaded,
    /// The fetch failed; the catalog is empty.
    Failed,
}

/// Listings plus the active filters.
pub struct CatalogStore<S> {
    source: S,
    listings: Vec<Listing>,
    filters: FilterState,
    /// Indices into `listings` that pass `filters`.
    visible: Vec<usize>,
    state: LoadState,
}

impl<S: ListingSource> CatalogStore<S> {
    /// Create an empty catalog that will fetch from `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            listings: Vec::new(),
            filters: FilterState::default(),
            visible: Vec::new(),
            state: LoadState::Idle,
        }
    }

    /// Fetch all listings and rebuild the filtered view.
    ///
    /// Failure is not an error for the caller: the catalog is left empty and
    /// [`LoadState::Failed`] is recorded. Nothing is retried.
    #[instrument(skip(self))]
    pub async fn initialize(&mut self) {
        self.state = LoadState::Loading;

        match self.source.fetch_listings().await {
            Ok(listings) => {
                tracing::info!(count = listings.len(), "Catalog loaded");
                self.listings = listings;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load catalog");
                self.listings.clear();
                self.state = LoadState::Failed;
            }
        }

        self.refresh();
    }

    /// Merge a partial filter change and recompute the view.
    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
        self.refresh();
    }

    /// Restore default filters and recompute the view.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.refresh();
    }

    /// Listings passing the current filters, in backend order.
    pub fn filtered(&self) -> impl Iterator<Item = &Listing> {
        self.visible.iter().filter_map(|&index| self.listings.get(index))
    }

    /// Number of listings passing the current filters.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.visible.len()
    }

    /// Every fetched listing, unfiltered.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Look up a fetched listing by ID, ignoring filters.
    #[must_use]
    pub fn listing(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Whether the last fetch failed.
    #[must_use]
    pub fn load_failed(&self) -> bool {
        self.state == LoadState::Failed
    }

    fn refresh(&mut self) {
        let filters = &self.filters;
        self.visible = self
            .listings
            .iter()
            .enumerate()
            .filter(|(_, listing)| filters.matches(listing))
            .map(|(index, _)| index)
            .collect();
        tracing::debug!(
            total = self.listings.len(),
            visible = self.visible.len(),
            "Catalog view recomputed"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use herd_market_core::{AnimalCategory, Price};
    use rust_decimal::Decimal;

    use super::*;
    use crate::backend::ApiError;

    struct FixedSource(Vec<Listing>);

    impl ListingSource for FixedSource {
        async fn fetch_listings(&self) -> Result<Vec<Listing>, ApiError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl ListingSource for FailingSource {
        async fn fetch_listings(&self) -> Result<Vec<Listing>, ApiError> {
            Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        }
    }

    fn herd() -> Vec<Listing> {
        vec![
            Listing::new(1, "Bella", AnimalCategory::Cow, Price::whole(100_000))
                .with_breed("Friesian")
                .with_location("Nakuru"),
            Listing::new(2, "Max", AnimalCategory::Goat, Price::whole(40_000))
                .with_breed("Boer")
                .with_location("Kajiado")
                .with_occasion_eligible(true),
            Listing::new(3, "Daisy", AnimalCategory::Cow, Price::whole(85_000))
                .with_breed("Ayrshire")
                .with_location("Nakuru"),
            Listing::new(4, "Sultan", AnimalCategory::Camel, Price::whole(250_000))
                .with_description("Strong pack camel")
                .with_location("Marsabit")
                .with_occasion_eligible(true),
        ]
    }

    async fn loaded() -> CatalogStore<FixedSource> {
        let mut catalog = CatalogStore::new(FixedSource(herd()));
        catalog.initialize().await;
        catalog
    }

    fn visible_ids<S: ListingSource>(catalog: &CatalogStore<S>) -> Vec<String> {
        catalog
            .filtered()
            .map(|listing| listing.id.to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_initialize_success() {
        let mut catalog = CatalogStore::new(FixedSource(herd()));
        assert_eq!(catalog.load_state(), LoadState::Idle);

        catalog.initialize().await;

        assert_eq!(catalog.load_state(), LoadState::Loaded);
        assert!(!catalog.is_loading());
        assert_eq!(catalog.listings().len(), 4);
        assert_eq!(visible_ids(&catalog), ["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn test_initialize_failure_leaves_catalog_empty() {
        let mut catalog = CatalogStore::new(FailingSource);
        catalog.initialize().await;

        assert!(catalog.load_failed());
        assert!(catalog.listings().is_empty());
        assert_eq!(catalog.filtered_count(), 0);
    }

    #[tokio::test]
    async fn test_category_scenario() {
        let mut catalog = CatalogStore::new(FixedSource(vec![
            Listing::new(1, "Bella", AnimalCategory::Cow, Price::whole(100_000)),
            Listing::new(2, "Max", AnimalCategory::Goat, Price::whole(40_000)),
        ]));
        catalog.initialize().await;

        catalog.update_filters(FilterUpdate::new().query("").category(AnimalCategory::Goat));

        assert_eq!(visible_ids(&catalog), ["2"]);
    }

    #[tokio::test]
    async fn test_filters_are_conjunctive_and_order_preserving() {
        let mut catalog = loaded().await;

        catalog.update_filters(FilterUpdate::new().location("nakuru"));
        assert_eq!(visible_ids(&catalog), ["1", "3"]);

        catalog.update_filters(FilterUpdate::new().max_price(Decimal::from(90_000)));
        assert_eq!(visible_ids(&catalog), ["3"]);

        catalog.update_filters(FilterUpdate::new().query("friesian"));
        assert!(visible_ids(&catalog).is_empty());
    }

    #[tokio::test]
    async fn test_occasion_filter() {
        let mut catalog = loaded().await;
        catalog.update_filters(FilterUpdate::new().occasion_only(true));
        assert_eq!(visible_ids(&catalog), ["2", "4"]);
    }

    #[tokio::test]
    async fn test_filtered_is_subset_satisfying_filters() {
        let mut catalog = loaded().await;
        let updates = [
            FilterUpdate::new().query("a"),
            FilterUpdate::new().category(AnimalCategory::Cow),
            FilterUpdate::new().min_price(Decimal::from(90_000)),
            FilterUpdate::new().category(CategoryFilter::All).clear_min_price(),
            FilterUpdate::new().query("camel").occasion_only(true),
            FilterUpdate::new().min_price(Decimal::from(300_000)).max_price(Decimal::from(1)),
        ];

        for update in updates {
            catalog.update_filters(update);
            for listing in catalog.filtered() {
                assert!(catalog.listings().contains(listing));
                assert!(catalog.filters().matches(listing));
            }
            let expected = catalog
                .listings()
                .iter()
                .filter(|listing| catalog.filters().matches(listing))
                .count();
            assert_eq!(catalog.filtered_count(), expected);
        }
    }

    #[tokio::test]
    async fn test_reset_restores_raw_set() {
        let mut catalog = loaded().await;
        catalog.update_filters(
            FilterUpdate::new()
                .query("bella")
                .category(AnimalCategory::Cow)
                .occasion_only(true),
        );
        assert_eq!(catalog.filtered_count(), 0);

        catalog.reset_filters();

        assert!(catalog.filters().is_default());
        let all: Vec<&Listing> = catalog.filtered().collect();
        let raw: Vec<&Listing> = catalog.listings().iter().collect();
        assert_eq!(all, raw);
    }

    #[tokio::test]
    async fn test_lookup_ignores_filters() {
        let mut catalog = loaded().await;
        catalog.update_filters(FilterUpdate::new().category(AnimalCategory::Horse));
        assert_eq!(catalog.filtered_count(), 0);
        assert_eq!(
            catalog.listing(&ListingId::from(4)).unwrap().name,
            "Sultan"
        );
        assert!(catalog.listing(&ListingId::from(99)).is_none());
    }
}
