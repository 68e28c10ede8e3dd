//! Catalog search filters.

use std::str::FromStr;

use herd_market_core::{AnimalCategory, Listing};
use rust_decimal::Decimal;

/// Category constraint: everything, or a single animal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(AnimalCategory),
}

impl CategoryFilter {
    fn admits(self, category: AnimalCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl From<AnimalCategory> for CategoryFilter {
    fn from(category: AnimalCategory) -> Self {
        Self::Only(category)
    }
}

/// Active search and browse constraints.
///
/// All constraints must hold for a listing to be shown. Price bounds are not
/// checked against each other; a minimum above the maximum matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Matched case-insensitively against name, breed, and description.
    pub query: String,
    pub category: CategoryFilter,
    /// Matched case-insensitively against the listing location.
    pub location: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Only show listings eligible for the seasonal occasion.
    pub occasion_only: bool,
}

impl FilterState {
    /// Whether `listing` satisfies every active constraint.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_query(listing)
            && self.category.admits(listing.category)
            && self.matches_location(listing)
            && self
                .min_price
                .is_none_or(|min| listing.price.amount() >= min)
            && self
                .max_price
                .is_none_or(|max| listing.price.amount() <= max)
            && (!self.occasion_only || listing.occasion_eligible)
    }

    /// Merge `update` into the current state. Fields the update leaves unset
    /// keep their value.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(query) = update.query {
            self.query = query;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(min_price) = update.min_price {
            self.min_price = min_price;
        }
        if let Some(max_price) = update.max_price {
            self.max_price = max_price;
        }
        if let Some(occasion_only) = update.occasion_only {
            self.occasion_only = occasion_only;
        }
    }

    /// Whether no constraint is active.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    fn matches_query(&self, listing: &Listing) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let query = self.query.to_lowercase();
        [&listing.name, &listing.breed, &listing.description]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    fn matches_location(&self, listing: &Listing) -> bool {
        match self.location.as_deref() {
            None | Some("") => true,
            Some(location) => listing
                .location
                .to_lowercase()
                .contains(&location.to_lowercase()),
        }
    }
}

/// A partial change to [`FilterState`].
///
/// `None` leaves the field alone. For the optional fields, `Some(None)`
/// clears the constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub query: Option<String>,
    pub category: Option<CategoryFilter>,
    pub location: Option<Option<String>>,
    pub min_price: Option<Option<Decimal>>,
    pub max_price: Option<Option<Decimal>>,
    pub occasion_only: Option<bool>,
}

impl FilterUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(Some(location.into()));
        self
    }

    #[must_use]
    pub fn clear_location(mut self) -> Self {
        self.location = Some(None);
        self
    }

    #[must_use]
    pub const fn min_price(mut self, min_price: Decimal) -> Self {
        self.min_price = Some(Some(min_price));
        self
    }

    #[must_use]
    pub const fn clear_min_price(mut self) -> Self {
        self.min_price = Some(None);
        self
    }

    #[must_use]
    pub const fn max_price(mut self, max_price: Decimal) -> Self {
        self.max_price = Some(Some(max_price));
        self
    }

    #[must_use]
    pub const fn clear_max_price(mut self) -> Self {
        self.max_price = Some(None);
        self
    }

    #[must_use]
    pub const fn occasion_only(mut self, occasion_only: bool) -> Self {
        self.occasion_only = Some(occasion_only);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use herd_market_core::Price;

    use super::*;

    fn bella() -> Listing {
        Listing::new(1, "Bella", AnimalCategory::Cow, Price::whole(100_000))
            .with_breed("Friesian")
            .with_description("Gentle dairy cow, 20L a day")
            .with_location("Nakuru Town")
    }

    #[test]
    fn test_default_matches_everything() {
        let filters = FilterState::default();
        assert!(filters.is_default());
        assert!(filters.matches(&bella()));
    }

    #[test]
    fn test_query_searches_name_breed_description() {
        let listing = bella();
        for query in ["bella", "FRIES", "dairy", "20l"] {
            let filters = FilterState {
                query: query.to_string(),
                ..FilterState::default()
            };
            assert!(filters.matches(&listing), "query {query:?} should match");
        }

        let filters = FilterState {
            query: "nakuru".to_string(),
            ..FilterState::default()
        };
        assert!(!filters.matches(&listing), "location is not searched by query");
    }

    #[test]
    fn test_category_filter() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate::new().category(AnimalCategory::Goat));
        assert!(!filters.matches(&bella()));

        filters.apply(FilterUpdate::new().category(CategoryFilter::All));
        assert!(filters.matches(&bella()));
    }

    #[test]
    fn test_location_filter_case_insensitive() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate::new().location("nakuru"));
        assert!(filters.matches(&bella()));

        filters.apply(FilterUpdate::new().location("Eldoret"));
        assert!(!filters.matches(&bella()));

        filters.apply(FilterUpdate::new().location(""));
        assert!(filters.matches(&bella()));
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let mut filters = FilterState::default();
        filters.apply(
            FilterUpdate::new()
                .min_price(Decimal::from(100_000))
                .max_price(Decimal::from(100_000)),
        );
        assert!(filters.matches(&bella()));

        filters.apply(FilterUpdate::new().min_price(Decimal::from(100_001)));
        assert!(!filters.matches(&bella()));
    }

    #[test]
    fn test_inverted_price_bounds_match_nothing() {
        let mut filters = FilterState::default();
        filters.apply(
            FilterUpdate::new()
                .min_price(Decimal::from(150_000))
                .max_price(Decimal::from(50_000)),
        );
        assert_eq!(filters.min_price, Some(Decimal::from(150_000)));
        assert!(!filters.matches(&bella()));
    }

    #[test]
    fn test_occasion_filter() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate::new().occasion_only(true));
        assert!(!filters.matches(&bella()));
        assert!(filters.matches(&bella().with_occasion_eligible(true)));
    }

    #[test]
    fn test_partial_update_retains_other_fields() {
        let mut filters = FilterState::default();
        filters.apply(
            FilterUpdate::new()
                .query("bella")
                .location("nakuru")
                .max_price(Decimal::from(200_000)),
        );
        filters.apply(FilterUpdate::new().category(AnimalCategory::Cow));

        assert_eq!(filters.query, "bella");
        assert_eq!(filters.location.as_deref(), Some("nakuru"));
        assert_eq!(filters.max_price, Some(Decimal::from(200_000)));
        assert_eq!(filters.category, CategoryFilter::Only(AnimalCategory::Cow));

        filters.apply(FilterUpdate::new().clear_location().clear_max_price());
        assert!(filters.location.is_none());
        assert!(filters.max_price.is_none());
        assert_eq!(filters.query, "bella");
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "sheep".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(AnimalCategory::Sheep))
        );
        assert!("yak".parse::<CategoryFilter>().is_err());
    }
}
