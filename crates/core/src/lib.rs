//! Herd Market Core - Shared types library.
//!
//! This crate provides the domain types used across all Herd Market components:
//! - `storefront` - Catalog, cart, wishlist, and notification stores
//! - `cli` - Command-line host that drives the stores
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Identifiers, prices, listings, notifications, and status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
