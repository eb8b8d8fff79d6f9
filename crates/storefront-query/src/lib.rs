//! Pure, synchronous queries over product collections.
//!
//! The shop page composes these as filter, then sort, then paginate; the
//! ranking module drives the home page's highlight strip and shelves. None
//! of the functions mutate their input or touch I/O.

pub mod filter;
pub mod paginate;
pub mod ranking;
pub mod sort;

pub use filter::{filter_products, PriceBounds, ProductFilters};
pub use paginate::{page_count, paginate};
pub use ranking::{
    best_seller_shelf, composite_score, featured_shelf, hot_sale_shelf, top_highlights,
};
pub use sort::{sort_products, sort_products_by_key, SortKey};
