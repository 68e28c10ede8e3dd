//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! Backend identifiers are opaque. Some records carry them as JSON strings,
//! others as integers, so every ID accepts both on the wire and normalizes to
//! its textual form.

use serde::Deserialize;

/// Wire representation accepted for any ID.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize` as a JSON string
/// - `Deserialize` from either a JSON string or a JSON integer
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>`, `From<i32>` and `From<i64>` implementations
///
/// # Example
///
/// ```rust
/// # use herd_market_core::define_id;
/// define_id!(BuyerId);
/// define_id!(OrderId);
///
/// let buyer_id = BuyerId::new("7");
/// let order_id = OrderId::from(7);
/// assert_eq!(buyer_id.as_str(), order_id.as_str());
///
/// // These are different types, so this won't compile:
/// // let _: BuyerId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from its textual form.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id.to_string())
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id.to_string())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                <$crate::types::id::RawId as ::serde::Deserialize>::deserialize(deserializer)
                    .map(|raw| Self(String::from(raw)))
            }
        }
    };
}

// Define standard entity IDs
define_id!(ListingId);
define_id!(NotificationId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_json_string_and_integer() {
        let from_str: ListingId = serde_json::from_str("\"64f1c2\"").unwrap();
        assert_eq!(from_str.as_str(), "64f1c2");

        let from_int: ListingId = serde_json::from_str("5").unwrap();
        assert_eq!(from_int, ListingId::from(5));
        assert_eq!(from_int.as_str(), "5");
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = ListingId::from(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }

    #[test]
    fn test_id_rejects_other_json() {
        assert!(serde_json::from_str::<ListingId>("true").is_err());
        assert!(serde_json::from_str::<ListingId>("{}").is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(NotificationId::new("n-1").to_string(), "n-1");
    }
}
