//! Marketplace REST backend.
//!
//! # Architecture
//!
//! - [`ListingSource`] is the seam the catalog fetches through
//! - [`HttpListingSource`] implements it with `reqwest` against
//!   `GET {base_url}/listings`
//! - One attempt per fetch: no retry, no timeout, no caching
//!
//! # Example
//!
//! ```rust,ignore
//! use herd_market_storefront::backend::{HttpListingSource, ListingSource};
//!
//! let source = HttpListingSource::new(&config.backend);
//! let listings = source.fetch_listings().await?;
//! ```

mod client;

use std::future::Future;

use herd_market_core::Listing;
use thiserror::Error;

pub use client::HttpListingSource;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the catalog gets its listings from.
pub trait ListingSource {
    /// Fetch the complete listing set.
    fn fetch_listings(&self) -> impl Future<Output = Result<Vec<Listing>, ApiError>> + Send;
}
