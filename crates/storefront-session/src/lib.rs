//! Per-visitor cart and wishlist state.
//!
//! Collections live in memory for the lifetime of a session and publish
//! their contents through [`tokio::sync::watch`], so UI code can subscribe
//! once and re-render whenever a mutation actually changes something.

pub mod collection;

pub use collection::SessionCollection;

/// One visitor's session: a cart and a wishlist with identical semantics.
#[derive(Debug)]
pub struct Session {
    pub cart: SessionCollection,
    pub wishlist: SessionCollection,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cart: SessionCollection::new("cart"),
            wishlist: SessionCollection::new("wishlist"),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
