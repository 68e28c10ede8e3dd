//! User-visible notices raised by store mutations.
//!
//! The presentation layer turns these into toasts.

use std::fmt;

/// Severity used to style a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
}

/// Outcome of a cart or wishlist mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    AddedToCart { name: String },
    AlreadyInCart { name: String },
    RemovedFromCart,
    CartCleared,
    AddedToWishlist { name: String },
    AlreadyInWishlist { name: String },
    RemovedFromWishlist,
    WishlistCleared,
}

impl Notice {
    /// Severity of the notice.
    #[must_use]
    pub const fn level(&self) -> NoticeLevel {
        match self {
            Self::AddedToCart { .. } | Self::AddedToWishlist { .. } => NoticeLevel::Success,
            Self::AlreadyInCart { .. }
            | Self::RemovedFromCart
            | Self::CartCleared
            | Self::AlreadyInWishlist { .. }
            | Self::RemovedFromWishlist
            | Self::WishlistCleared => NoticeLevel::Info,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddedToCart { name } => write!(f, "{name} added to cart"),
            Self::AlreadyInCart { name } => {
                write!(f, "{name} is already in your cart, quantity increased")
            }
            Self::RemovedFromCart => write!(f, "Item removed from cart"),
            Self::CartCleared => write!(f, "Cart cleared"),
            Self::AddedToWishlist { name } => write!(f, "{name} saved to wishlist"),
            Self::AlreadyInWishlist { name } => write!(f, "{name} is already in your wishlist"),
            Self::RemovedFromWishlist => write!(f, "Removed from wishlist"),
            Self::WishlistCleared => write!(f, "Wishlist cleared"),
        }
    }
}
