//! Herd Market Storefront library.
//!
//! Client-side state for the livestock marketplace: the listing catalog with
//! its search filters, the shopping cart, the wishlist, and the notification
//! panel. Each store is constructed explicitly and handed to whatever
//! presentation layer drives it; see [`state::Storefront`].
//!
//! # Architecture
//!
//! - [`backend`] - Fetches listings from the REST backend over `reqwest`
//! - [`storage`] - Durable key-value storage that mirrors store contents
//! - [`catalog`] - Listing set plus filtered view
//! - [`cart`], [`wishlist`], [`notifications`] - Persisted collections with
//!   derived aggregates
//!
//! Stores never fail: backend and storage errors are logged and degrade to an
//! empty or unchanged collection.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notice;
pub mod notifications;
pub mod state;
pub mod storage;
pub mod wishlist;

pub use cart::{CartLine, CartStore};
pub use catalog::{CatalogStore, CategoryFilter, FilterState, FilterUpdate, LoadState};
pub use error::{Error, Result};
pub use notice::Notice;
pub use notifications::NotificationStore;
pub use state::Storefront;
pub use wishlist::WishlistStore;
