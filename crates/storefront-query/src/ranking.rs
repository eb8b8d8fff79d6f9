//! Home-page merchandising: a ranked highlight strip plus per-flag shelves.

use storefront_core::Product;

/// How many products the highlight strip shows.
pub const HIGHLIGHT_COUNT: usize = 3;

/// How many products each merchandising shelf shows.
pub const SHELF_SIZE: usize = 4;

/// Weighted merchandising signal: featured counts 3, best seller 2, hot
/// sale 1. Flags combine additively, so the range is 0 to 6.
#[must_use]
pub fn composite_score(product: &Product) -> u8 {
    3 * u8::from(product.featured) + 2 * u8::from(product.best_seller) + u8::from(product.hot_sale)
}

/// Picks the highlight strip: the top [`HIGHLIGHT_COUNT`] products by
/// composite score, breaking ties by rating and then by descending id.
///
/// Products with a zero score never rank. When nothing in the catalog
/// carries a merchandising flag the strip falls back to the first
/// [`HIGHLIGHT_COUNT`] products in catalog order.
#[must_use]
pub fn top_highlights(products: &[Product]) -> Vec<Product> {
    let mut candidates: Vec<&Product> =
        products.iter().filter(|p| composite_score(p) > 0).collect();
    if candidates.is_empty() {
        return products.iter().take(HIGHLIGHT_COUNT).cloned().collect();
    }
    candidates.sort_by(|a, b| {
        composite_score(b)
            .cmp(&composite_score(a))
            .then_with(|| b.rating.total_cmp(&a.rating))
            .then_with(|| b.id.cmp(&a.id))
    });
    candidates
        .into_iter()
        .take(HIGHLIGHT_COUNT)
        .cloned()
        .collect()
}

/// First [`SHELF_SIZE`] featured products in catalog order.
#[must_use]
pub fn featured_shelf(products: &[Product]) -> Vec<Product> {
    shelf(products, |p| p.featured)
}

/// First [`SHELF_SIZE`] best sellers in catalog order.
#[must_use]
pub fn best_seller_shelf(products: &[Product]) -> Vec<Product> {
    shelf(products, |p| p.best_seller)
}

/// First [`SHELF_SIZE`] hot-sale products in catalog order.
#[must_use]
pub fn hot_sale_shelf(products: &[Product]) -> Vec<Product> {
    shelf(products, |p| p.hot_sale)
}

fn shelf(products: &[Product], flag: impl Fn(&Product) -> bool) -> Vec<Product> {
    products
        .iter()
        .filter(|p| flag(p))
        .take(SHELF_SIZE)
        .cloned()
        .collect()
}
