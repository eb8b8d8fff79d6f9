use serde::{Deserialize, Serialize};

use storefront_core::Product;

/// Orderings the shop page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    RatingDesc,
    /// Ids grow as the catalog grows, so descending id approximates
    /// newest-first.
    Newest,
}

impl SortKey {
    /// Parses the wire form of a sort key (`"price-asc"`, `"newest"`, ...).
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "name-asc" => Some(Self::NameAsc),
            "name-desc" => Some(Self::NameDesc),
            "rating-desc" => Some(Self::RatingDesc),
            "newest" => Some(Self::Newest),
            _ => None,
        }
    }
}

/// Returns a copy of `products` ordered by `key`.
///
/// The sort is stable: products that compare equal keep their input order.
/// Name comparisons are case-insensitive.
#[must_use]
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::PriceAsc => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::NameAsc => {
            sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::NameDesc => {
            sorted.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
        }
        SortKey::RatingDesc => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest => sorted.sort_by(|a, b| b.id.cmp(&a.id)),
    }
    sorted
}

/// Sorts by the wire form of a key; an unrecognized key leaves the input
/// order untouched.
#[must_use]
pub fn sort_products_by_key(products: &[Product], key: &str) -> Vec<Product> {
    match SortKey::parse(key) {
        Some(parsed) => sort_products(products, parsed),
        None => products.to_vec(),
    }
}
