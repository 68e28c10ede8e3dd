//! `reqwest` implementation of [`ListingSource`].

use std::sync::Arc;

use herd_market_core::Listing;
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use super::{ApiError, ListingSource};
use crate::config::BackendConfig;

/// Number of body characters kept when reporting a failed response.
const ERROR_BODY_PREVIEW: usize = 200;

/// Client for the marketplace listings endpoint.
#[derive(Clone)]
pub struct HttpListingSource {
    inner: Arc<HttpListingSourceInner>,
}

struct HttpListingSourceInner {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<SecretString>,
}

impl HttpListingSource {
    /// Create a new listings client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            inner: Arc::new(HttpListingSourceInner {
                client: reqwest::Client::new(),
                endpoint: config.endpoint("listings"),
                api_token: config.api_token.clone(),
            }),
        }
    }

    /// URL the listings are fetched from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }
}

impl ListingSource for HttpListingSource {
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    async fn fetch_listings(&self) -> Result<Vec<Listing>, ApiError> {
        let mut request = self
            .inner
            .client
            .get(&self.inner.endpoint)
            .header("Accept", "application/json");

        if let Some(token) = &self.inner.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Backend returned non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: response_text.chars().take(ERROR_BODY_PREVIEW).collect(),
            });
        }

        let listings: Vec<Listing> = match serde_json::from_str(&response_text) {
            Ok(listings) => listings,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse listings response"
                );
                return Err(ApiError::Parse(e));
            }
        };

        tracing::debug!(count = listings.len(), "Fetched listings");
        Ok(listings)
    }
}
