//! Core types for Herd Market.
//!
//! This module provides type-safe wrappers for the marketplace domain.

pub mod id;
pub mod listing;
pub mod notification;
pub mod price;
pub mod status;

pub use id::*;
pub use listing::{Listing, SellerContact};
pub use notification::{NotificationRecord, format_relative_time};
pub use price::{Price, PriceError};
pub use status::*;
