//! Unified error handling with Sentry integration.
//!
//! Store operations never return errors; they log and degrade. The seams
//! underneath them (backend, storage, configuration) do, and [`Error`]
//! aggregates those for the host binary.

use thiserror::Error;

use crate::backend::ApiError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Backend request failed.
    #[error("Backend error: {0}")]
    Api(#[from] ApiError),

    /// Durable storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The listing catalog could not be fetched.
    #[error("Catalog unavailable")]
    CatalogUnavailable,
}

/// Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error. Without an initialized Sentry client this is a no-op.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added to cart", Some(&[("listing_id", "123")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
