//! Integration tests for Herd Market.
//!
//! The tests drive the storefront stores against real collaborators: an
//! in-process HTTP backend built with `axum` and file storage in a temporary
//! directory. No external services are needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p herd-market-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_http` - Listing fetch over HTTP, success and failure paths
//! - `persistence` - Stores reopened over the same data directory

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::get;
use herd_market_storefront::backend::HttpListingSource;
use herd_market_storefront::config::{BackendConfig, ConfigError};
use tokio::net::TcpListener;

/// Canned response served by [`FakeBackend`] at `GET /api/listings`.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: StatusCode,
    pub body: String,
}

impl CannedResponse {
    /// A `200 OK` response with `body` as JSON.
    #[must_use]
    pub fn ok(body: &serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    /// A response with an arbitrary status and raw body.
    #[must_use]
    pub fn raw(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug)]
struct FakeState {
    response: CannedResponse,
    authorization: Mutex<Vec<Option<String>>>,
}

/// Listings backend served on an ephemeral local port.
///
/// The server task runs until the test's runtime shuts down.
pub struct FakeBackend {
    addr: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeBackend {
    /// Bind to `127.0.0.1:0` and start serving `response`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn spawn(response: CannedResponse) -> std::io::Result<Self> {
        let state = Arc::new(FakeState {
            response,
            authorization: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/listings", get(listings))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                report_server_error(&e);
            }
        });

        Ok(Self { addr, state })
    }

    /// Base URL the storefront should be configured with.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Backend configuration pointing at this server.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL does not parse.
    pub fn config(&self) -> Result<BackendConfig, ConfigError> {
        BackendConfig::new(&self.base_url())
    }

    /// Listing source pointing at this server.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL does not parse.
    pub fn source(&self) -> Result<HttpListingSource, ConfigError> {
        self.config().map(|config| HttpListingSource::new(&config))
    }

    /// `Authorization` header of every request received so far.
    #[must_use]
    pub fn authorization_headers(&self) -> Vec<Option<String>> {
        self.state
            .authorization
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.authorization_headers().len()
    }
}

async fn listings(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state
        .authorization
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(authorization);

    (
        state.response.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.response.body.clone(),
    )
}

#[allow(clippy::print_stderr)]
fn report_server_error(error: &std::io::Error) {
    eprintln!("fake backend stopped: {error}");
}
