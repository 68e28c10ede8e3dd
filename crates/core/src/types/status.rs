//! Status and category enums for marketplace entities.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a listing.
///
/// Listings change status server-side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Active,
    Sold,
    Archived,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Sold => write!(f, "sold"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

/// Kind of animal a listing offers.
///
/// Unrecognized values from the backend fall back to [`AnimalCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalCategory {
    Cow,
    Goat,
    Sheep,
    Camel,
    Horse,
    #[serde(other)]
    Other,
}

impl AnimalCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Cow,
        Self::Goat,
        Self::Sheep,
        Self::Camel,
        Self::Horse,
        Self::Other,
    ];

    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cow => "cow",
            Self::Goat => "goat",
            Self::Sheep => "sheep",
            Self::Camel => "camel",
            Self::Horse => "horse",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for AnimalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnimalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid animal category: {s}"))
    }
}

/// Source of a notification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Listing,
    Order,
    User,
    System,
    #[default]
    #[serde(other)]
    Other,
}

impl NotificationCategory {
    /// Icon name shown next to notifications of this category.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Listing => "tag",
            Self::Order => "shopping-cart",
            Self::User => "user",
            Self::System => "settings",
            Self::Other => "bell",
        }
    }
}

impl std::fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Listing => write!(f, "listing"),
            Self::Order => write!(f, "order"),
            Self::User => write!(f, "user"),
            Self::System => write!(f, "system"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for NotificationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "listing" => Ok(Self::Listing),
            "order" => Ok(Self::Order),
            "user" => Ok(Self::User),
            "system" => Ok(Self::System),
            "other" => Ok(Self::Other),
            _ => Err(format!("invalid notification category: {s}")),
        }
    }
}
