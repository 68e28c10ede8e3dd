//! Animal listings as served by the marketplace backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AnimalCategory, ListingId, ListingStatus, Price};

/// Seller contact details attached to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerContact {
    /// Seller display name.
    pub name: String,
    /// Phone number, if the seller shares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl SellerContact {
    /// `tel:` link for the seller's phone number.
    #[must_use]
    pub fn call_link(&self) -> Option<String> {
        self.phone.as_deref().map(|phone| {
            let digits: String = phone
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect();
            format!("tel:{digits}")
        })
    }
}

/// An animal offered for sale.
///
/// Listings are read-only on the client. Field names follow the backend's
/// JSON payload (`name`, `type`, `occasionEligible`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    /// Display title.
    pub name: String,
    #[serde(rename = "type")]
    pub category: AnimalCategory,
    #[serde(default)]
    pub breed: String,
    /// Age in years.
    #[serde(default)]
    pub age: f64,
    /// Weight in kilograms.
    #[serde(default)]
    pub weight: f64,
    pub price: Price,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub listed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: ListingStatus,
    /// Whether the animal qualifies for the seasonal occasion filter.
    #[serde(default)]
    pub occasion_eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<SellerContact>,
}

impl Listing {
    /// Create a listing with the required fields and empty defaults for the rest.
    #[must_use]
    pub fn new(
        id: impl Into<ListingId>,
        name: impl Into<String>,
        category: AnimalCategory,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            breed: String::new(),
            age: 0.0,
            weight: 0.0,
            price,
            description: String::new(),
            images: Vec::new(),
            location: String::new(),
            listed_at: None,
            status: ListingStatus::Active,
            occasion_eligible: false,
            seller: None,
        }
    }

    #[must_use]
    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub const fn with_occasion_eligible(mut self, eligible: bool) -> Self {
        self.occasion_eligible = eligible;
        self
    }

    /// Whether the listing can still be bought.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == ListingStatus::Active
    }

    /// First image, used as the thumbnail.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_from_backend_payload() {
        let json = r#"{
            "id": 1,
            "name": "Bella",
            "type": "cow",
            "breed": "Friesian",
            "age": 3,
            "weight": 450.5,
            "price": 100000,
            "description": "Healthy dairy cow",
            "images": ["bella-1.jpg", "bella-2.jpg"],
            "location": "Nakuru",
            "createdAt": "2026-09-01T08:00:00Z",
            "status": "active",
            "occasionEligible": true,
            "seller": { "name": "Wanjiru", "phone": "+254 700 000 000" }
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, ListingId::from(1));
        assert_eq!(listing.category, AnimalCategory::Cow);
        assert_eq!(listing.price, Price::whole(100_000));
        assert_eq!(listing.thumbnail(), Some("bella-1.jpg"));
        assert!(listing.occasion_eligible);
        assert!(listing.listed_at.is_some());
        assert!(listing.is_available());
    }

    #[test]
    fn test_listing_minimal_payload_uses_defaults() {
        let json = r#"{"id": "abc", "name": "Max", "type": "goat", "price": 40000}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.status, ListingStatus::Active);
        assert!(!listing.occasion_eligible);
        assert!(listing.images.is_empty());
        assert!(listing.seller.is_none());
    }

    #[test]
    fn test_listing_serialization_roundtrip() {
        let listing = Listing::new(7, "Dora", AnimalCategory::Sheep, Price::whole(15_000))
            .with_breed("Dorper")
            .with_location("Narok");
        let json = serde_json::to_string(&listing).unwrap();
        assert!(json.contains("\"type\":\"sheep\""));
        let back: Listing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, listing);
    }

    #[test]
    fn test_seller_call_link() {
        let seller = SellerContact {
            name: "Wanjiru".to_string(),
            phone: Some("+254 (700) 000-001".to_string()),
        };
        assert_eq!(seller.call_link().as_deref(), Some("tel:+254700000001"));

        let silent = SellerContact {
            name: "Anon".to_string(),
            phone: None,
        };
        assert!(silent.call_link().is_none());
    }
}
